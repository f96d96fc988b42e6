#![allow(clippy::field_reassign_with_default)]
//! Serde resilience for ContinuityConfig: old config documents missing
//! newer fields must deserialize to defaults, not error.

use wayline_core::config::ContinuityConfig;

#[test]
fn partial_config_deserializes_with_defaults() {
    let json = r#"{ "idle_window_threshold_hours": 24 }"#;
    let config: ContinuityConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.idle_window_threshold_hours, 24, "explicit field should be used");
    assert_eq!(
        config.fill_confidence_threshold, 0.6,
        "missing threshold should get default"
    );
}

#[test]
fn empty_json_all_defaults() {
    let config: ContinuityConfig = serde_json::from_str("{}").unwrap();
    let default_config = ContinuityConfig::default();

    assert_eq!(
        serde_json::to_string(&config).unwrap(),
        serde_json::to_string(&default_config).unwrap(),
        "empty JSON should produce identical config to Default::default()"
    );
}

#[test]
fn default_idle_threshold_is_48_hours() {
    let config = ContinuityConfig::default();
    assert_eq!(config.idle_window_threshold_hours, 48);
}

#[test]
fn custom_threshold_roundtrips() {
    let mut config = ContinuityConfig::default();
    config.fill_confidence_threshold = 0.8;

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: ContinuityConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.fill_confidence_threshold, 0.8);
}
