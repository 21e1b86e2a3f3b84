use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{IssueLevel, ValidationIssue};

/// Outcome of validating one answer.
///
/// `valid` is derived from `issues` at construction and never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub auto_fixes: Option<AutoFixReport>,
}

impl ValidationResult {
    pub fn new(
        issues: Vec<ValidationIssue>,
        summary: ValidationSummary,
        auto_fixes: Option<AutoFixReport>,
    ) -> Self {
        let valid = !issues.iter().any(|i| i.level.blocks_validity());
        Self {
            valid,
            issues,
            summary,
            auto_fixes,
        }
    }

    /// Number of issues at the given level.
    pub fn count(&self, level: IssueLevel) -> usize {
        self.issues.iter().filter(|i| i.level == level).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueLevel::Error)
    }

    pub fn first_error(&self) -> Option<&ValidationIssue> {
        self.issues.iter().find(|i| i.level == IssueLevel::Error)
    }

    /// Number of fixes the auto-fix pass applied, 0 when it did not run.
    pub fn fix_count(&self) -> usize {
        self.auto_fixes.as_ref().map(|f| f.details.len()).unwrap_or(0)
    }
}

/// Counts reported alongside the issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationSummary {
    /// Student mentions extracted from the narrative.
    #[serde(rename = "mentionedInNL")]
    #[ts(type = "number")]
    pub mentioned_in_nl: usize,
    /// Records found in the structured payload after normalization.
    #[serde(rename = "presentInStructuredData")]
    #[ts(type = "number")]
    pub present_in_structured_data: usize,
    #[serde(rename = "placeholdersFound")]
    #[ts(type = "number")]
    pub placeholders_found: usize,
}

/// What the auto-fix pass changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AutoFixReport {
    pub applied: bool,
    /// One human-readable line per fix.
    pub details: Vec<String>,
    /// Repaired copy of the structured payload, present only when `applied`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fixed_structured_data: Option<serde_json::Value>,
}

impl AutoFixReport {
    /// Report for a pass that changed nothing.
    pub fn none() -> Self {
        Self {
            applied: false,
            details: Vec::new(),
            fixed_structured_data: None,
        }
    }
}
