//! Bare "Firstname Lastname" recognition.

use regex::Regex;
use rollcall_core::errors::RollcallResult;
use rollcall_core::models::{MatchedSpan, Mention};
use rollcall_core::traits::IMentionMatcher;

use super::patterns;

/// Matches two adjacent capitalized tokens. Produces mentions without an id.
#[derive(Debug, Clone)]
pub struct BareNameMatcher {
    regex: Regex,
}

impl BareNameMatcher {
    pub const NAME: &'static str = "bare_name";

    pub fn new(name_token: &str) -> RollcallResult<Self> {
        let source = patterns::bare_name_source(name_token);
        Ok(Self {
            regex: patterns::compile(Self::NAME, &source)?,
        })
    }
}

impl Default for BareNameMatcher {
    fn default() -> Self {
        Self {
            regex: patterns::DEFAULT_BARE_NAME.clone(),
        }
    }
}

impl IMentionMatcher for BareNameMatcher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn find(&self, text: &str) -> Vec<Mention> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let first = caps.get(1)?.as_str();
                let last = caps.get(2)?.as_str();
                Some(Mention::from_tokens(
                    &[first, last],
                    None,
                    MatchedSpan::new(whole.start(), whole.end()),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pairs_in_order() {
        let found = BareNameMatcher::default().find("Alice Brown and Bob Lee were absent");
        let names: Vec<_> = found.iter().map(|m| m.full_name.as_str()).collect();
        assert_eq!(names, vec!["Alice Brown", "Bob Lee"]);
        assert!(found.iter().all(|m| m.id.is_none()));
    }

    #[test]
    fn ignores_lowercase_and_single_words() {
        assert!(BareNameMatcher::default()
            .find("attendance was fine for everyone in Room")
            .is_empty());
    }
}
