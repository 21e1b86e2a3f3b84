use serde_json::Value;

use crate::models::ValidationResult;

/// Narrative-vs-structured-data consistency validation.
pub trait IValidator: Send + Sync {
    /// Validate a narrative against its structured payload.
    ///
    /// Never fails: malformed payloads degrade to "no records found".
    fn validate(&self, narrative: &str, structured_data: &Value) -> ValidationResult;
}
