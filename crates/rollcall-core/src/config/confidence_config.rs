use serde::{Deserialize, Serialize};

use super::defaults;

/// Fallback confidence assigned when the producer supplied none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Used when the validated answer has no error-level issues.
    pub valid_default: f64,
    /// Used when the validated answer has at least one error.
    pub invalid_default: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            valid_default: defaults::DEFAULT_VALID_CONFIDENCE,
            invalid_default: defaults::DEFAULT_INVALID_CONFIDENCE,
        }
    }
}
