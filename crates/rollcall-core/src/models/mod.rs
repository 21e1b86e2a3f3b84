mod mention;
mod validation_issue;
mod validation_meta;
mod validation_result;

pub use mention::{MatchedSpan, Mention};
pub use validation_issue::{IssueLevel, ValidationIssue};
pub use validation_meta::ValidationMeta;
pub use validation_result::{AutoFixReport, ValidationResult, ValidationSummary};
