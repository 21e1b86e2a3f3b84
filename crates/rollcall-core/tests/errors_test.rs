use rollcall_core::errors::*;

#[test]
fn invalid_pattern_carries_name_and_reason() {
    let err = ExtractionError::InvalidPattern {
        name: "id_bearing".into(),
        reason: "unclosed group".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("id_bearing"));
    assert!(msg.contains("unclosed group"));
}

#[test]
fn invalid_name_length_carries_value() {
    let err = ExtractionError::InvalidNameLength { max: 0 };
    assert!(err.to_string().contains('0'));
}

#[test]
fn strict_mode_failure_carries_count_and_first_message() {
    let err = ValidationError::StrictModeFailed {
        errors: 3,
        first: "structuredData is empty".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains("structuredData is empty"));
}

// --- From impls ---

#[test]
fn extraction_error_converts_to_rollcall_error() {
    let err: RollcallError = ExtractionError::InvalidNameLength { max: 0 }.into();
    assert!(matches!(err, RollcallError::ExtractionError(_)));
}

#[test]
fn validation_error_converts_to_rollcall_error() {
    let err: RollcallError = ValidationError::StrictModeFailed {
        errors: 1,
        first: "x".into(),
    }
    .into();
    assert!(matches!(err, RollcallError::ValidationError(_)));
}

#[test]
fn serialization_error_converts_to_rollcall_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: RollcallError = json_err.into();
    assert!(matches!(err, RollcallError::SerializationError(_)));
}

#[test]
fn toml_error_converts_to_config_error() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: RollcallError = toml_err.into();
    assert!(matches!(err, RollcallError::ConfigError(_)));
}
