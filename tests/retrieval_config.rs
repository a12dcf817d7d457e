use std::collections::HashMap;

use passage_core::config::{
    ConfigError, RetrievalConfig, DEFAULT_FILE_MATCHES, DEFAULT_SENTENCE_MATCHES,
    ENV_FILE_MATCHES, ENV_SENTENCE_MATCHES,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_select_one_file_and_one_sentence() {
    let config = RetrievalConfig::v0();

    assert_eq!(config.file_matches, DEFAULT_FILE_MATCHES);
    assert_eq!(config.sentence_matches, DEFAULT_SENTENCE_MATCHES);
    assert_eq!(config, RetrievalConfig::default());
    assert_eq!(RetrievalConfig::from_lookup(lookup(&[])).unwrap(), config);
}

#[test]
fn test_overrides_are_applied() {
    let config = RetrievalConfig::from_lookup(lookup(&[
        (ENV_FILE_MATCHES, "3"),
        (ENV_SENTENCE_MATCHES, " 2 "),
    ]))
    .unwrap();

    assert_eq!(config.file_matches, 3);
    assert_eq!(config.sentence_matches, 2);
}

#[test]
fn test_invalid_override_is_rejected() {
    let err = RetrievalConfig::from_lookup(lookup(&[(ENV_FILE_MATCHES, "many")])).unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: ENV_FILE_MATCHES.to_string(),
            value: "many".to_string(),
        }
    );
}

#[test]
fn test_zero_matches_is_rejected() {
    let err = RetrievalConfig::from_lookup(lookup(&[(ENV_SENTENCE_MATCHES, "0")])).unwrap_err();

    assert_eq!(err, ConfigError::ZeroMatches("sentence_matches"));
}

#[test]
fn golden_config_serialization() {
    let json = serde_json::to_string(&RetrievalConfig::v0()).unwrap();

    assert_eq!(json, r#"{"file_matches":1,"sentence_matches":1}"#);
}
