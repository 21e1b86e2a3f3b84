use rollcall_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RollcallConfig::from_toml("").unwrap();

    // Extraction defaults
    assert_eq!(config.extraction.max_name_tokens, 3);
    assert!(config.extraction.bare_name_fallback);
    assert_eq!(
        config.extraction.name_token_pattern,
        defaults::DEFAULT_NAME_TOKEN_PATTERN
    );

    // Validation defaults
    assert_eq!(
        config.validation.placeholder_tokens,
        vec!["Unknown Student", "Unknown", "N/A", "TBD"]
    );
    assert!(!config.validation.auto_fix);
    assert!(!config.validation.strict);

    // Confidence defaults
    assert_eq!(config.confidence.valid_default, 0.8);
    assert_eq!(config.confidence.invalid_default, 0.6);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[extraction]
max_name_tokens = 2
bare_name_fallback = false

[validation]
auto_fix = true
placeholder_tokens = ["Pending"]
"#;
    let config = RollcallConfig::from_toml(toml).unwrap();
    assert_eq!(config.extraction.max_name_tokens, 2);
    assert!(!config.extraction.bare_name_fallback);
    // Non-overridden fields keep defaults
    assert_eq!(config.extraction.id_pattern, defaults::DEFAULT_ID_PATTERN);
    assert!(config.validation.auto_fix);
    assert_eq!(config.validation.placeholder_tokens, vec!["Pending"]);
    assert_eq!(config.confidence.valid_default, 0.8);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = RollcallConfig::from_toml("[validation\nauto_fix = yes").unwrap_err();
    assert!(matches!(err, rollcall_core::RollcallError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let config = RollcallConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RollcallConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.extraction.id_pattern,
        config.extraction.id_pattern
    );
    assert_eq!(
        roundtripped.validation.placeholder_tokens,
        config.validation.placeholder_tokens
    );
}
