//! ValidationEngine — implements IValidator, runs extraction, normalization,
//! placeholder detection and the consistency checks, then optionally the
//! auto-fix pass.

use rollcall_core::config::RollcallConfig;
use rollcall_core::errors::{RollcallResult, ValidationError};
use rollcall_core::models::{Mention, ValidationResult};
use rollcall_core::traits::IValidator;
use rollcall_observability::validation_span;
use serde_json::Value;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::checks::{self, CheckContext};
use crate::extraction::MentionExtractor;
use crate::healing;
use crate::normalize::StructuredShape;
use crate::placeholder::PlaceholderDetector;

/// Per-run switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Run the auto-fix pass and report the repaired payload.
    pub auto_fix: bool,
    /// Turn error-level issues into an `Err` from [`ValidationEngine::validate_strict`].
    pub strict: bool,
}

impl ValidationOptions {
    pub fn with_auto_fix(mut self) -> Self {
        self.auto_fix = true;
        self
    }
}

/// The response-consistency engine.
///
/// Stateless after construction; share it behind `&` or `Arc`.
#[derive(Debug)]
pub struct ValidationEngine {
    extractor: MentionExtractor,
    placeholders: PlaceholderDetector,
    options: ValidationOptions,
}

impl ValidationEngine {
    /// Build an engine from configuration. Fails only on invalid patterns.
    pub fn new(config: &RollcallConfig) -> RollcallResult<Self> {
        Ok(Self {
            extractor: MentionExtractor::from_config(&config.extraction)?,
            placeholders: PlaceholderDetector::from_config(&config.validation),
            options: ValidationOptions {
                auto_fix: config.validation.auto_fix,
                strict: config.validation.strict,
            },
        })
    }

    /// Replace the mention extractor, e.g. to add a custom matcher.
    pub fn with_extractor(mut self, extractor: MentionExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn extract_mentions(&self, narrative: &str) -> Vec<Mention> {
        self.extractor.extract(narrative)
    }

    /// Validate with the configured options.
    pub fn validate(&self, narrative: &str, structured_data: &Value) -> ValidationResult {
        self.validate_with_options(narrative, structured_data, self.options)
    }

    /// Validate and always run the auto-fix pass.
    pub fn validate_and_fix(&self, narrative: &str, structured_data: &Value) -> ValidationResult {
        self.validate_with_options(narrative, structured_data, self.options.with_auto_fix())
    }

    /// Validate, failing when any error-level issue is found.
    pub fn validate_strict(
        &self,
        narrative: &str,
        structured_data: &Value,
    ) -> RollcallResult<ValidationResult> {
        let result = self.validate(narrative, structured_data);
        ensure_no_errors(&result)?;
        Ok(result)
    }

    /// Full pipeline. Infallible: unrecognized payloads have no records.
    pub fn validate_with_options(
        &self,
        narrative: &str,
        structured_data: &Value,
        options: ValidationOptions,
    ) -> ValidationResult {
        let _span = validation_span!(narrative.len(), options.auto_fix).entered();

        // Stage 1: Mentions.
        let mentions = self.extractor.extract(narrative);
        debug!(mentions = mentions.len(), "mentions extracted");

        // Stage 2: Records.
        let shape = StructuredShape::classify(structured_data);
        let records = shape.records();
        debug!(shape = shape.kind(), records = records.len(), "structured data normalized");

        // Stage 3: Placeholders.
        let placeholders = self.placeholders.detect(&records);
        debug!(placeholders = placeholders.len(), "placeholders detected");

        // Stage 4: Checks.
        let ctx = CheckContext {
            narrative,
            mentions: &mentions,
            records: &records,
            placeholders: &placeholders,
        };
        let issues = checks::run_all(&ctx);
        debug!(issues = issues.len(), "checks complete");

        // Stage 5: Auto-fix.
        let auto_fixes = options
            .auto_fix
            .then(|| healing::fill_missing_ids(structured_data, &mentions));

        let result = assemble(
            mentions.len(),
            records.len(),
            placeholders.len(),
            issues,
            auto_fixes,
        );
        info!(
            valid = result.valid,
            errors = result.error_count(),
            issues = result.issues.len(),
            fixes = result.fix_count(),
            "validation complete"
        );
        result
    }
}

/// `Err` when `result` carries any error-level issue.
pub(crate) fn ensure_no_errors(result: &ValidationResult) -> RollcallResult<()> {
    match result.first_error() {
        Some(first) => Err(ValidationError::StrictModeFailed {
            errors: result.error_count(),
            first: first.message.clone(),
        }
        .into()),
        None => Ok(()),
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self {
            extractor: MentionExtractor::default(),
            placeholders: PlaceholderDetector::default(),
            options: ValidationOptions::default(),
        }
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, narrative: &str, structured_data: &Value) -> ValidationResult {
        ValidationEngine::validate(self, narrative, structured_data)
    }
}
