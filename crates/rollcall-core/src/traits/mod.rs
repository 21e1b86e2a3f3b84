mod confidence_policy;
mod mention_matcher;
mod validator;

pub use confidence_policy::IConfidencePolicy;
pub use mention_matcher::IMentionMatcher;
pub use validator::IValidator;
