//! Placeholder-name detection.

use rollcall_core::config::ValidationConfig;
use rollcall_core::constants::PLACEHOLDER_TOKENS;

use crate::normalize::StudentRecord;

/// A record whose name is a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderHit {
    pub index: usize,
    pub path: String,
    /// The placeholder token that matched.
    pub value: String,
}

/// Flags records named with a known placeholder token.
#[derive(Debug, Clone)]
pub struct PlaceholderDetector {
    tokens: Vec<String>,
}

impl PlaceholderDetector {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.placeholder_tokens.clone())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// One hit per placeholder record, in record order.
    ///
    /// The display name is checked first, then `firstName`, then `lastName`.
    /// Records without any name are skipped.
    pub fn detect(&self, records: &[StudentRecord<'_>]) -> Vec<PlaceholderHit> {
        records
            .iter()
            .filter_map(|record| {
                let display = record.display_name();
                if display.is_empty() {
                    return None;
                }
                let hit = [Some(display.as_str()), record.first_name(), record.last_name()]
                    .into_iter()
                    .flatten()
                    .find(|candidate| self.is_placeholder(candidate))
                    .map(|value| PlaceholderHit {
                        index: record.index,
                        path: record.path.clone(),
                        value: value.to_string(),
                    });
                hit
            })
            .collect()
    }

    fn is_placeholder(&self, candidate: &str) -> bool {
        self.tokens.iter().any(|t| t == candidate)
    }
}

impl Default for PlaceholderDetector {
    fn default() -> Self {
        Self::new(PLACEHOLDER_TOKENS.iter().map(|t| t.to_string()).collect())
    }
}
