//! Unit tests for common-config crate

use common_config::{AnalyzerConfig, SessionConfig, SluiceConfig};

#[test]
fn test_sluice_config_default() {
    let config = SluiceConfig::default();

    assert_eq!(config.analyzer.max_iterations, 100);
    assert!(!config.analyzer.enable_trace);
    assert!(config.analyzer.rewrite_delete_to_truncate);
    assert_eq!(config.session.default_database, "mydb");
}

#[test]
fn test_analyzer_config_builders() {
    let config = AnalyzerConfig::default()
        .with_max_iterations(3)
        .with_trace(true)
        .with_delete_to_truncate(false);

    assert_eq!(config.max_iterations, 3);
    assert!(config.enable_trace);
    assert!(!config.rewrite_delete_to_truncate);
}

#[test]
fn test_sluice_config_serialization() {
    let mut config = SluiceConfig::default();
    config.analyzer.enable_trace = true;
    config.session.default_database = "sales".to_string();

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("sales"));

    let deserialized: SluiceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_config_partial_json() {
    let config = SluiceConfig::from_json(r#"{"session": {"default_database": "hr"}}"#).unwrap();

    assert_eq!(config.session.default_database, "hr");
    assert_eq!(config.analyzer, AnalyzerConfig::default());
}

#[test]
fn test_config_partial_analyzer_json() {
    let config =
        SluiceConfig::from_json(r#"{"analyzer": {"rewrite_delete_to_truncate": false}}"#).unwrap();

    assert!(!config.analyzer.rewrite_delete_to_truncate);
    assert_eq!(config.analyzer.max_iterations, 100);
    assert_eq!(config.session, SessionConfig::default());
}

#[test]
fn test_config_invalid_json() {
    let err = SluiceConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("SerdeJsonError"));
}

#[test]
fn test_config_json_roundtrip_via_helpers() {
    let config = SluiceConfig::default();
    let json = config.to_json().unwrap();
    assert_eq!(SluiceConfig::from_json(&json).unwrap(), config);
}
