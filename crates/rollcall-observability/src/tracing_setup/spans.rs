//! Span definitions per operation: validation, auto-fix, merge.

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($narrative_len:expr, $auto_fix:expr) => {
        tracing::debug_span!(
            "rollcall.validation",
            narrative_len = $narrative_len,
            auto_fix = $auto_fix
        )
    };
}

/// Create an auto-fix span.
#[macro_export]
macro_rules! autofix_span {
    ($mentions_with_id:expr) => {
        tracing::debug_span!("rollcall.autofix", mentions_with_id = $mentions_with_id)
    };
}

/// Create a merge span.
#[macro_export]
macro_rules! merge_span {
    ($has_confidence:expr) => {
        tracing::debug_span!("rollcall.merge", has_confidence = $has_confidence)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VALIDATION: &str = "rollcall.validation";
    pub const AUTOFIX: &str = "rollcall.autofix";
    pub const MERGE: &str = "rollcall.merge";
}
