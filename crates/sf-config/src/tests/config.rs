use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StoreKind};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guards) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(config.api.fallback_credential.as_str(), eq(""));
    assert_that!(config.session.store, eq(StoreKind::File));
    assert_that!(config.session.file.as_str(), eq(crate::DEFAULT_SESSION_FILE));
    assert_that!(*config.logging.level, eq(crate::DEFAULT_LOG_LEVEL));
    assert!(config.logging.file.is_none());
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guards) = setup_config_dir();
    let nested = temp.path().join("nested/.sf");
    let _dir = EnvGuard::set("SF_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "https://cms.example.com"
              fallback_credential = "from-file"

              [session]
              store = "memory"

              [logging]
              level = "debug"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://cms.example.com"));
    assert_that!(config.api.fallback_credential.as_str(), eq("from-file"));
    assert_that!(config.session.store, eq(StoreKind::Memory));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://cms.example.com\"",
    )
    .unwrap();
    let _url = EnvGuard::set("SF_API_BASE_URL", "http://localhost:9000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://localhost:9000"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _credential = EnvGuard::set("SF_API_FALLBACK_CREDENTIAL", "shared-secret");
    let _store = EnvGuard::set("SF_SESSION_STORE", "memory");
    let _file = EnvGuard::set("SF_SESSION_FILE", "alt.json");
    let _colored = EnvGuard::set("SF_LOG_COLORED", "1");
    let _log_file = EnvGuard::set("SF_LOG_FILE", "sf.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.fallback_credential.as_str(), eq("shared-secret"));
    assert_that!(config.session.store, eq(StoreKind::Memory));
    assert_that!(config.session.file.as_str(), eq("alt.json"));
    assert_that!(config.logging.colored, eq(true));
    assert_eq!(config.logging.file.as_deref(), Some("sf.log"));
}

#[test]
#[serial]
fn given_unknown_store_env_when_load_then_keeps_default() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _store = EnvGuard::set("SF_SESSION_STORE", "redis");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.store, eq(StoreKind::File));
}

#[test]
#[serial]
fn given_session_file_when_session_path_then_inside_config_dir() {
    // Given
    let (temp, _guards) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("session.json"));
}

// =========================================================================
// Error Path Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("TOML parse error"));
}

#[test]
#[serial]
fn given_defaults_when_validate_then_error_mentions_fallback_credential() {
    // Given
    let (_temp, _guards) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("fallback_credential"));
}

#[test]
#[serial]
fn given_fallback_credential_when_validate_then_ok() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _credential = EnvGuard::set("SF_API_FALLBACK_CREDENTIAL", "shared-secret");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
