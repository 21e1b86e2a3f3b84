/// Errors raised while building the mention extractor.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("pattern '{name}' failed to compile: {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("max_name_tokens must be at least 1, got {max}")]
    InvalidNameLength { max: usize },
}
