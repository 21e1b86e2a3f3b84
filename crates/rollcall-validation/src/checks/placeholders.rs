//! Placeholder records become errors.

use rollcall_core::models::ValidationIssue;

use crate::placeholder::PlaceholderHit;

/// One error per placeholder record.
pub fn validate(hits: &[PlaceholderHit]) -> Vec<ValidationIssue> {
    hits.iter()
        .map(|hit| {
            ValidationIssue::error(format!(
                "Placeholder value \"{}\" found in student record at index {}",
                hit.value, hit.index
            ))
            .with_path(hit.path.clone())
            .with_suggestion("Resolve the student's real name before showing this answer")
        })
        .collect()
}
