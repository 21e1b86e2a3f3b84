use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The `_validation` block attached to a merged answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationMeta {
    /// Whether validation ran to completion.
    pub applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub valid: Option<bool>,
    /// Number of issues found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub issues: Option<u32>,
    /// Number of fixes applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fixes: Option<u32>,
    /// Why validation did not apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl ValidationMeta {
    pub fn completed(valid: bool, issues: usize, fixes: usize) -> Self {
        Self {
            applied: true,
            valid: Some(valid),
            issues: Some(saturating_u32(issues)),
            fixes: Some(saturating_u32(fixes)),
            error: None,
        }
    }

    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            applied: false,
            valid: None,
            issues: None,
            fixes: None,
            error: Some(error.into()),
        }
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
