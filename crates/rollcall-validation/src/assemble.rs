//! Result assembly.

use rollcall_core::models::{AutoFixReport, ValidationIssue, ValidationResult, ValidationSummary};

/// Fold the pipeline outputs into a [`ValidationResult`].
///
/// `valid` is false iff any issue is an error.
pub fn assemble(
    mentions: usize,
    records: usize,
    placeholders: usize,
    issues: Vec<ValidationIssue>,
    auto_fixes: Option<AutoFixReport>,
) -> ValidationResult {
    let summary = ValidationSummary {
        mentioned_in_nl: mentions,
        present_in_structured_data: records,
        placeholders_found: placeholders,
    };
    ValidationResult::new(issues, summary, auto_fixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_alone_keep_result_valid() {
        let result = assemble(1, 1, 0, vec![ValidationIssue::warning("w")], None);
        assert!(result.valid);
        assert_eq!(result.summary.mentioned_in_nl, 1);
    }

    #[test]
    fn any_error_invalidates() {
        let issues = vec![ValidationIssue::info("i"), ValidationIssue::error("e")];
        let result = assemble(0, 2, 1, issues, Some(AutoFixReport::none()));
        assert!(!result.valid);
        assert_eq!(result.summary.placeholders_found, 1);
        assert_eq!(result.fix_count(), 0);
    }
}
