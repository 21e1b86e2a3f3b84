//! Integration with the query-answer pipeline.
//!
//! [`AnswerValidator::validate_and_merge`] folds a validation run back into
//! the answer. [`AnswerValidator::validate_or_pass_through`] is the
//! fail-open variant for the HTTP boundary: any failure, panics included,
//! returns the original answer marked as unvalidated.

mod answer;
mod confidence;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rollcall_core::config::RollcallConfig;
use rollcall_core::errors::{RollcallError, RollcallResult};
use rollcall_core::models::ValidationMeta;
use rollcall_core::traits::IConfidencePolicy;
use rollcall_observability::merge_span;
use serde_json::Value;
use tracing::{debug, warn};

pub use answer::QueryAnswer;
pub use confidence::ValidityConfidence;

use crate::engine::{ensure_no_errors, ValidationEngine, ValidationOptions};

/// Validates query answers and merges the outcome into them.
pub struct AnswerValidator {
    engine: ValidationEngine,
    policy: Box<dyn IConfidencePolicy>,
}

impl AnswerValidator {
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            engine,
            policy: Box::new(ValidityConfidence::default()),
        }
    }

    pub fn from_config(config: &RollcallConfig) -> RollcallResult<Self> {
        Ok(Self::new(ValidationEngine::new(config)?)
            .with_policy(ValidityConfidence::from_config(&config.confidence)))
    }

    /// Replace the confidence policy.
    pub fn with_policy(mut self, policy: impl IConfidencePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Validate with auto-fix and return a new answer.
    ///
    /// Confidence is resolved through the policy, `structuredData` is
    /// replaced by the repaired copy when a fix applied, and `_validation`
    /// is attached. Fails only in strict mode.
    pub fn validate_and_merge(&self, answer: &QueryAnswer) -> RollcallResult<QueryAnswer> {
        let _span = merge_span!(answer.confidence.is_some()).entered();

        let options = ValidationOptions {
            auto_fix: true,
            ..self.engine.options()
        };
        let result = self.engine.validate_with_options(
            &answer.natural_language_answer,
            &answer.structured_data,
            options,
        );

        if options.strict {
            ensure_no_errors(&result)?;
        }

        let mut merged = answer.clone();
        merged.confidence = Some(self.policy.resolve(answer.confidence, &result));
        if let Some(fixed) = result
            .auto_fixes
            .as_ref()
            .filter(|f| f.applied)
            .and_then(|f| f.fixed_structured_data.clone())
        {
            merged.structured_data = fixed;
        }
        merged.validation = Some(ValidationMeta::completed(
            result.valid,
            result.issues.len(),
            result.fix_count(),
        ));
        debug!(confidence = merged.confidence, "answer merged");
        Ok(merged)
    }

    /// [`validate_and_merge`](Self::validate_and_merge), but never fails.
    ///
    /// On error or panic the original answer is returned with
    /// `_validation: {applied: false, error}`.
    pub fn validate_or_pass_through(&self, answer: &QueryAnswer) -> QueryAnswer {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.validate_and_merge(answer)))
            .unwrap_or_else(|payload| Err(RollcallError::Internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(merged) => merged,
            Err(err) => {
                warn!(error = %err, "validation unavailable; passing answer through");
                let mut original = answer.clone();
                original.validation = Some(ValidationMeta::unavailable(err.to_string()));
                original
            }
        }
    }

    /// JSON in, JSON out, fail-open.
    pub fn validate_value(&self, answer: Value) -> Value {
        let answer = QueryAnswer::from_value(answer);
        self.validate_or_pass_through(&answer).into_value()
    }

    /// Fail-open validation of many answers in parallel. Output order
    /// matches input order.
    pub fn validate_batch(&self, answers: &[QueryAnswer]) -> Vec<QueryAnswer> {
        answers
            .par_iter()
            .map(|a| self.validate_or_pass_through(a))
            .collect()
    }
}

impl Default for AnswerValidator {
    fn default() -> Self {
        Self::new(ValidationEngine::default())
    }
}

impl std::fmt::Debug for AnswerValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerValidator")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("validation panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("validation panicked: {s}")
    } else {
        "validation panicked".to_string()
    }
}
