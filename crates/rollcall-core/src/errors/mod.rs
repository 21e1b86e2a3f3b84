mod extraction_error;
mod validation_error;

pub use extraction_error::ExtractionError;
pub use validation_error::ValidationError;

/// Top-level error for every fallible Rollcall operation.
///
/// Validation findings are never reported through this type; they are
/// `ValidationIssue`s on the result. Errors here mean the caller asked for
/// something the engine cannot do (bad configuration, strict-mode failure)
/// or a defect was caught at an integration boundary.
#[derive(Debug, thiserror::Error)]
pub enum RollcallError {
    #[error("extraction error: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<toml::de::Error> for RollcallError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

pub type RollcallResult<T> = Result<T, RollcallError>;
