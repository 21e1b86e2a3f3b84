use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Byte offsets of a match within the narrative, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchedSpan {
    #[ts(type = "number")]
    pub start: usize,
    #[ts(type = "number")]
    pub end: usize,
}

impl MatchedSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether two spans share at least one byte.
    pub fn intersects(&self, other: &MatchedSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A candidate student reference found in narrative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub full_name: String,
    pub first_name: String,
    /// Remaining name tokens joined by spaces; empty for one-token names.
    pub last_name: String,
    /// Identifier given in parentheses after the name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<String>,
    pub matched_span: MatchedSpan,
}

impl Mention {
    /// Build a mention from name tokens. `tokens` must not be empty.
    pub fn from_tokens(tokens: &[&str], id: Option<String>, span: MatchedSpan) -> Self {
        let first_name = tokens.first().copied().unwrap_or_default().to_string();
        let last_name = tokens.iter().skip(1).copied().collect::<Vec<_>>().join(" ");
        Self {
            full_name: tokens.join(" "),
            first_name,
            last_name,
            id,
            matched_span: span,
        }
    }

    /// Lowercased `(first, last)` pair used for case-insensitive matching.
    pub fn name_key(&self) -> (String, String) {
        (self.first_name.to_lowercase(), self.last_name.to_lowercase())
    }

    /// `Full Name (ID)` or just `Full Name`.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{} ({})", self.full_name, id),
            None => self.full_name.clone(),
        }
    }
}
