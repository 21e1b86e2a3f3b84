//! Consistency checks between extracted mentions and normalized records.
//!
//! Each check is independent. [`run_all`] applies them in a fixed order,
//! which is also the order issues appear in the result.

pub mod completeness;
pub mod coverage;
pub mod matching;
pub mod placeholders;
pub mod types;

use rollcall_core::models::{Mention, ValidationIssue};

use crate::normalize::StudentRecord;
use crate::placeholder::PlaceholderHit;

/// Everything the checks read. Nothing here is mutated.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub narrative: &'a str,
    pub mentions: &'a [Mention],
    pub records: &'a [StudentRecord<'a>],
    pub placeholders: &'a [PlaceholderHit],
}

/// Run every check and return issues in emission order.
pub fn run_all(ctx: &CheckContext<'_>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // 1–2. Mentions without records, records without mentions.
    issues.extend(coverage::validate_presence(ctx));

    // 3. Placeholder names.
    issues.extend(placeholders::validate(ctx.placeholders));

    // 4. Every mention resolves to a record.
    let matching = matching::validate(ctx);
    issues.extend(matching.issues);

    // 5. Mentioned records carry the fields the narrative relies on.
    issues.extend(completeness::validate(ctx, &matching.referenced));

    // 6. Field types.
    issues.extend(types::validate(ctx.records));

    // 7. Records the narrative never talks about.
    issues.extend(coverage::validate_unreferenced(ctx, &matching.referenced));

    issues
}
