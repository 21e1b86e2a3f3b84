//! Student-mention extraction from narrative text.
//!
//! Matchers run in priority order. A mention whose span intersects a span
//! already claimed by an earlier matcher is dropped, so "John Smith (S1)"
//! is never counted a second time as the bare name "John Smith".

pub mod bare_name;
pub mod dates;
pub mod id_bearing;
pub mod patterns;

use rollcall_core::config::ExtractionConfig;
use rollcall_core::errors::RollcallResult;
use rollcall_core::models::{MatchedSpan, Mention};
use rollcall_core::traits::IMentionMatcher;

pub use bare_name::BareNameMatcher;
pub use id_bearing::IdBearingMatcher;

/// Ordered set of mention matchers with overlap suppression.
pub struct MentionExtractor {
    matchers: Vec<Box<dyn IMentionMatcher>>,
}

impl MentionExtractor {
    /// An extractor with no matchers. Finds nothing until matchers are added.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Build the two-tier extractor described by `config`.
    pub fn from_config(config: &ExtractionConfig) -> RollcallResult<Self> {
        let mut extractor = Self::empty().with_matcher(IdBearingMatcher::new(
            &config.name_token_pattern,
            &config.id_pattern,
            config.max_name_tokens,
        )?);
        if config.bare_name_fallback {
            extractor = extractor.with_matcher(BareNameMatcher::new(&config.name_token_pattern)?);
        }
        Ok(extractor)
    }

    /// Append a matcher at the lowest priority.
    pub fn with_matcher(mut self, matcher: impl IMentionMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Names of the registered matchers, highest priority first.
    pub fn matcher_names(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Extract mentions ordered by position in `text`.
    ///
    /// Duplicates (same name and id at different positions) are kept.
    pub fn extract(&self, text: &str) -> Vec<Mention> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut claimed: Vec<MatchedSpan> = Vec::new();
        let mut mentions = Vec::new();

        for matcher in &self.matchers {
            for mention in matcher.find(text) {
                if mention.full_name.is_empty() {
                    continue;
                }
                let span = mention.matched_span;
                if claimed.iter().any(|c| c.intersects(&span)) {
                    continue;
                }
                claimed.push(span);
                mentions.push(mention);
            }
        }

        mentions.sort_by_key(|m| m.matched_span.start);
        mentions
    }
}

impl Default for MentionExtractor {
    fn default() -> Self {
        Self::empty()
            .with_matcher(IdBearingMatcher::default())
            .with_matcher(BareNameMatcher::default())
    }
}

impl std::fmt::Debug for MentionExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MentionExtractor")
            .field("matchers", &self.matcher_names())
            .finish()
    }
}
