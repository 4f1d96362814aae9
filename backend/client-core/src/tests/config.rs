// Unit tests for config loading, validation, and the env override.

use crate::DEFAULT_BASE_URL;
use crate::config::{AppConfig, BASE_URL_ENV_VAR};
use crate::error::config::ConfigError;

use serial_test::serial;

#[test]
fn given_missing_config_file_when_loaded_then_defaults_used() {
    // GIVEN: An empty config directory
    let dir = tempfile::tempdir().expect("tempdir");

    // WHEN: Loading
    let config = AppConfig::load(dir.path()).expect("load should fall back to defaults");

    // THEN: Defaults point at the local backend
    assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.backend.base_url, "http://localhost:8000");
}

#[test]
fn given_saved_config_when_reloaded_then_round_trips() {
    // GIVEN: A config with a non-default backend
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = AppConfig::default();
    config.backend.base_url = "http://192.168.1.20:8000".to_string();

    // WHEN: Saving and reloading
    config.save(dir.path()).expect("save");
    let reloaded = AppConfig::load(dir.path()).expect("reload");

    // THEN: The stored value survives
    assert_eq!(reloaded.backend.base_url, "http://192.168.1.20:8000");
}

#[test]
fn given_corrupted_config_file_when_loaded_then_parse_error() {
    // GIVEN: A config file with broken JSON
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("config.json"), "{not json").expect("write");

    // WHEN: Loading
    let result = AppConfig::load(dir.path());

    // THEN: Surfaced as a parse error, not silently defaulted
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_base_url_without_scheme_when_validated_then_rejected() {
    // GIVEN: A base URL missing its scheme
    let mut config = AppConfig::default();
    config.backend.base_url = "localhost:8000".to_string();

    // WHEN/THEN: Validation refuses it
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    // And saving never writes an invalid config
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
#[serial]
fn given_env_override_when_base_url_resolved_then_env_wins() {
    // GIVEN: A configured URL and an environment override
    let config = AppConfig::default();
    // SAFETY: guarded by #[serial]; no other thread reads the environment
    // while this test runs.
    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "http://10.0.0.5:8000") };

    // WHEN: Resolving
    let resolved = config.resolve_base_url();

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };

    // THEN: The override wins
    assert_eq!(resolved, "http://10.0.0.5:8000");
}

#[test]
#[serial]
fn given_blank_env_override_when_base_url_resolved_then_config_value_used() {
    // GIVEN: An override set to whitespace
    let config = AppConfig::default();
    // SAFETY: guarded by #[serial].
    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "   ") };

    // WHEN: Resolving
    let resolved = config.resolve_base_url();

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };

    // THEN: Blank overrides are ignored
    assert_eq!(resolved, DEFAULT_BASE_URL);
}
