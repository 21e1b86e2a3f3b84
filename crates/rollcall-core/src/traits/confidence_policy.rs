use crate::models::ValidationResult;

/// Decides the confidence attached to a validated answer.
pub trait IConfidencePolicy: Send + Sync {
    /// `supplied` is the producer's own score, if it sent one.
    fn resolve(&self, supplied: Option<f64>, result: &ValidationResult) -> f64;
}
