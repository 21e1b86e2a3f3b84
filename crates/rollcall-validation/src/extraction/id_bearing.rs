//! "Full Name (ID)" recognition.

use regex::Regex;
use rollcall_core::errors::{ExtractionError, RollcallResult};
use rollcall_core::models::{MatchedSpan, Mention};
use rollcall_core::traits::IMentionMatcher;

use super::patterns;

/// Matches one to N capitalized tokens followed by a parenthesized id.
#[derive(Debug, Clone)]
pub struct IdBearingMatcher {
    regex: Regex,
}

impl IdBearingMatcher {
    pub const NAME: &'static str = "id_bearing";

    pub fn new(name_token: &str, id: &str, max_tokens: usize) -> RollcallResult<Self> {
        if max_tokens == 0 {
            return Err(ExtractionError::InvalidNameLength { max: max_tokens }.into());
        }
        let source = patterns::id_bearing_source(name_token, id, max_tokens);
        Ok(Self {
            regex: patterns::compile(Self::NAME, &source)?,
        })
    }
}

impl Default for IdBearingMatcher {
    fn default() -> Self {
        Self {
            regex: patterns::DEFAULT_ID_BEARING.clone(),
        }
    }
}

impl IMentionMatcher for IdBearingMatcher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn find(&self, text: &str) -> Vec<Mention> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str();
                let id = caps.get(2)?.as_str().trim();
                let tokens: Vec<&str> = name.split_whitespace().collect();
                if tokens.is_empty() || id.is_empty() {
                    return None;
                }
                Some(Mention::from_tokens(
                    &tokens,
                    Some(id.to_string()),
                    MatchedSpan::new(whole.start(), whole.end()),
                ))
            })
            .collect()
    }
}
