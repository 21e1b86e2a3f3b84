//! Whether narrative and structured data talk about anything in common.

use std::collections::BTreeSet;

use rollcall_core::constants::STRUCTURED_DATA_ROOT;
use rollcall_core::models::ValidationIssue;

use super::CheckContext;

/// Mentions with no records at all, or records with no mentions at all.
pub fn validate_presence(ctx: &CheckContext<'_>) -> Vec<ValidationIssue> {
    let mentions = ctx.mentions.len();
    let records = ctx.records.len();

    if mentions == 0 && records > 0 {
        return vec![ValidationIssue::warning(format!(
            "Narrative mentions no students, but structuredData contains {records} record(s)"
        ))
        .with_path(STRUCTURED_DATA_ROOT)
        .with_suggestion(
            "Refer to students as \"First Last\" or \"First Last (ID)\" so they can be cross-checked",
        )];
    }

    if mentions > 0 && records == 0 {
        return vec![ValidationIssue::error(format!(
            "Narrative mentions {mentions} student(s), but structuredData is empty"
        ))
        .with_path(STRUCTURED_DATA_ROOT)
        .with_suggestion("Include every mentioned student in structuredData")];
    }

    Vec::new()
}

/// One info issue counting records no mention refers to.
///
/// Only meaningful when both sides are non-empty.
pub fn validate_unreferenced(
    ctx: &CheckContext<'_>,
    referenced: &BTreeSet<usize>,
) -> Vec<ValidationIssue> {
    if ctx.mentions.is_empty() || ctx.records.is_empty() {
        return Vec::new();
    }

    let unreferenced = ctx
        .records
        .iter()
        .filter(|r| !referenced.contains(&r.index))
        .count();

    if unreferenced == 0 {
        return Vec::new();
    }

    vec![ValidationIssue::info(format!(
        "{unreferenced} record(s) in structuredData are not referenced in the narrative"
    ))
    .with_path(STRUCTURED_DATA_ROOT)]
}
