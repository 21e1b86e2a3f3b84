//! Regex construction for the name matchers.

use std::sync::LazyLock;

use regex::Regex;
use rollcall_core::config::defaults;
use rollcall_core::errors::{ExtractionError, RollcallResult};

/// Default "Name (ID)" pattern.
pub static DEFAULT_ID_BEARING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&id_bearing_source(
        defaults::DEFAULT_NAME_TOKEN_PATTERN,
        defaults::DEFAULT_ID_PATTERN,
        defaults::DEFAULT_MAX_NAME_TOKENS,
    ))
    .unwrap()
});

/// Default bare "Firstname Lastname" pattern.
pub static DEFAULT_BARE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&bare_name_source(defaults::DEFAULT_NAME_TOKEN_PATTERN)).unwrap());

/// Name of one to `max_tokens` tokens followed by a parenthesized id.
///
/// Group 1 is the name, group 2 the id. Tokens are separated by spaces or
/// tabs only, so a name never spans a line break.
pub fn id_bearing_source(name_token: &str, id: &str, max_tokens: usize) -> String {
    let extra = max_tokens.saturating_sub(1);
    format!(r"\b((?:{name_token})(?:[ \t]+(?:{name_token})){{0,{extra}}})[ \t]*\([ \t]*((?:{id}))[ \t]*\)")
}

/// Two adjacent name tokens. Groups 1 and 2 are the tokens.
pub fn bare_name_source(name_token: &str) -> String {
    format!(r"\b((?:{name_token}))[ \t]+((?:{name_token}))\b")
}

/// Compile `source`, reporting failures against the matcher `name`.
pub fn compile(name: &str, source: &str) -> RollcallResult<Regex> {
    Regex::new(source).map_err(|e| {
        ExtractionError::InvalidPattern {
            name: name.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
