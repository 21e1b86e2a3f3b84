use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::PLACEHOLDER_TOKENS;

/// Consistency-check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Values that mark a record name as a placeholder.
    pub placeholder_tokens: Vec<String>,
    /// Run the auto-fix pass by default.
    pub auto_fix: bool,
    /// Treat any error-level issue as a failed validation.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            placeholder_tokens: PLACEHOLDER_TOKENS.iter().map(|t| t.to_string()).collect(),
            auto_fix: defaults::DEFAULT_AUTO_FIX,
            strict: defaults::DEFAULT_STRICT,
        }
    }
}
