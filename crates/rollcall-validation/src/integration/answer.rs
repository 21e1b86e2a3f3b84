//! Lenient view of a query answer as produced upstream.

use rollcall_core::models::ValidationMeta;
use serde_json::{Map, Number, Value};

const NARRATIVE_KEY: &str = "naturalLanguageAnswer";
const NARRATIVE_ALIAS: &str = "narrativeText";
const STRUCTURED_KEY: &str = "structuredData";
const CONFIDENCE_KEY: &str = "confidence";
const ACTIONS_KEY: &str = "suggestedActions";
const VALIDATION_KEY: &str = "_validation";

/// A query answer: narrative, structured payload and passthrough fields.
///
/// Unknown top-level fields are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    pub natural_language_answer: String,
    pub structured_data: Value,
    pub confidence: Option<f64>,
    pub suggested_actions: Option<Value>,
    pub validation: Option<ValidationMeta>,
    pub extra: Map<String, Value>,
    narrative_key: &'static str,
}

impl QueryAnswer {
    pub fn new(natural_language_answer: impl Into<String>, structured_data: Value) -> Self {
        Self {
            natural_language_answer: natural_language_answer.into(),
            structured_data,
            confidence: None,
            suggested_actions: None,
            validation: None,
            extra: Map::new(),
            narrative_key: NARRATIVE_KEY,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Parse an answer without failing.
    ///
    /// A non-object answer, a missing or non-string narrative and a
    /// non-numeric confidence all fall back to empty values. `narrativeText`
    /// is read when `naturalLanguageAnswer` is absent, and written back
    /// under the same key.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut obj) = value else {
            return Self::new("", Value::Null);
        };

        let narrative_key = if obj.contains_key(NARRATIVE_KEY) || !obj.contains_key(NARRATIVE_ALIAS)
        {
            NARRATIVE_KEY
        } else {
            NARRATIVE_ALIAS
        };
        let natural_language_answer = match obj.remove(narrative_key) {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        let structured_data = obj.remove(STRUCTURED_KEY).unwrap_or(Value::Null);
        let confidence = obj.remove(CONFIDENCE_KEY).and_then(|c| c.as_f64());
        let suggested_actions = obj.remove(ACTIONS_KEY);
        // A previous `_validation` block is stale once the answer is revalidated.
        obj.remove(VALIDATION_KEY);

        Self {
            natural_language_answer,
            structured_data,
            confidence,
            suggested_actions,
            validation: None,
            extra: obj,
            narrative_key,
        }
    }

    /// Serialize back to JSON. `_validation` is always the last key.
    pub fn into_value(self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            self.narrative_key.to_string(),
            Value::String(self.natural_language_answer),
        );
        obj.insert(STRUCTURED_KEY.to_string(), self.structured_data);
        if let Some(number) = self.confidence.and_then(Number::from_f64) {
            obj.insert(CONFIDENCE_KEY.to_string(), Value::Number(number));
        }
        if let Some(actions) = self.suggested_actions {
            obj.insert(ACTIONS_KEY.to_string(), actions);
        }
        obj.extend(self.extra);
        if let Some(meta) = self.validation {
            obj.insert(VALIDATION_KEY.to_string(), meta_to_value(&meta));
        }
        Value::Object(obj)
    }
}

fn meta_to_value(meta: &ValidationMeta) -> Value {
    let mut obj = Map::new();
    obj.insert("applied".into(), Value::Bool(meta.applied));
    if let Some(valid) = meta.valid {
        obj.insert("valid".into(), Value::Bool(valid));
    }
    if let Some(issues) = meta.issues {
        obj.insert("issues".into(), Value::from(issues));
    }
    if let Some(fixes) = meta.fixes {
        obj.insert("fixes".into(), Value::from(fixes));
    }
    if let Some(error) = &meta.error {
        obj.insert("error".into(), Value::String(error.clone()));
    }
    Value::Object(obj)
}
