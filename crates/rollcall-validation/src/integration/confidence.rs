//! Default confidence policy.

use rollcall_core::config::ConfidenceConfig;
use rollcall_core::models::ValidationResult;
use rollcall_core::traits::IConfidencePolicy;

/// Keeps the producer's confidence; fills it from validity when missing.
///
/// A supplied value of zero, or one that is not finite, counts as missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityConfidence {
    pub valid_default: f64,
    pub invalid_default: f64,
}

impl ValidityConfidence {
    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self {
            valid_default: config.valid_default,
            invalid_default: config.invalid_default,
        }
    }
}

impl Default for ValidityConfidence {
    fn default() -> Self {
        Self::from_config(&ConfidenceConfig::default())
    }
}

impl IConfidencePolicy for ValidityConfidence {
    fn resolve(&self, supplied: Option<f64>, result: &ValidationResult) -> f64 {
        match supplied {
            Some(c) if c.is_finite() && c != 0.0 => c,
            _ if result.valid => self.valid_default,
            _ => self.invalid_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::models::{ValidationIssue, ValidationSummary};

    fn result(valid: bool) -> ValidationResult {
        let issues = if valid {
            vec![]
        } else {
            vec![ValidationIssue::error("e")]
        };
        ValidationResult::new(issues, ValidationSummary::default(), None)
    }

    #[test]
    fn supplied_value_is_kept() {
        assert_eq!(ValidityConfidence::default().resolve(Some(0.42), &result(false)), 0.42);
    }

    #[test]
    fn missing_or_zero_falls_back_on_validity() {
        let policy = ValidityConfidence::default();
        assert_eq!(policy.resolve(None, &result(true)), 0.8);
        assert_eq!(policy.resolve(Some(0.0), &result(false)), 0.6);
        assert_eq!(policy.resolve(Some(f64::NAN), &result(true)), 0.8);
    }
}
