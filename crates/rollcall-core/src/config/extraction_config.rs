use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity-extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Regex for a single capitalized name token (no capture groups).
    pub name_token_pattern: String,
    /// Regex for the identifier inside "Name (ID)" (no capture groups).
    pub id_pattern: String,
    /// Maximum number of name tokens before an identifier.
    pub max_name_tokens: usize,
    /// Whether bare "Firstname Lastname" pairs are extracted.
    pub bare_name_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_token_pattern: defaults::DEFAULT_NAME_TOKEN_PATTERN.to_string(),
            id_pattern: defaults::DEFAULT_ID_PATTERN.to_string(),
            max_name_tokens: defaults::DEFAULT_MAX_NAME_TOKENS,
            bare_name_fallback: defaults::DEFAULT_BARE_NAME_FALLBACK,
        }
    }
}
