/// Errors raised when a caller opts into treating findings as failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("strict validation failed with {errors} error-level issue(s); first: {first}")]
    StrictModeFailed { errors: usize, first: String },
}
