use crate::REGISTRY_DEFAULT_BASE_URL;
use crate::config::{ENV_BASE_URL, ENV_TIMEOUT_SECS, RegistryConfig};
use crate::error::ConfigError;

use std::time::Duration;

use serial_test::serial;

fn clear_env() {
    // SAFETY: env-mutating tests are serialized with #[serial].
    unsafe {
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_TIMEOUT_SECS);
    }
}

/// **VALUE**: Verifies a missing config file is not an error.
///
/// **WHY THIS MATTERS**: First runs have no file; the client must still start against
/// the default local registry.
///
/// **BUG THIS CATCHES**: Would catch `load` surfacing a ReadError for a missing file.
#[test]
fn given_missing_file_when_loaded_then_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = RegistryConfig::load(&dir.path().join("registry.toml")).unwrap();

    assert_eq!(config, RegistryConfig::default());
    assert_eq!(config.base_url, REGISTRY_DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn given_partial_toml_when_loaded_then_missing_fields_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(
        &path,
        "base_url = \"https://registry.example.com/apis/registry/v3\"\nuser_agent = \"ingest/2.1\"\n",
    )
    .unwrap();

    let config = RegistryConfig::load(&path).unwrap();

    assert_eq!(config.base_url, "https://registry.example.com/apis/registry/v3");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.user_agent.as_deref(), Some("ingest/2.1"));
}

#[test]
fn given_invalid_toml_when_loaded_then_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(&path, "base_url = [not toml").unwrap();

    let err = RegistryConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// **VALUE**: Verifies a loaded file is validated, not just parsed.
///
/// **BUG THIS CATCHES**: Would catch `load` skipping `validate`.
#[test]
fn given_out_of_range_timeout_in_file_when_loaded_then_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(&path, "timeout_secs = 0\n").unwrap();

    let err = RegistryConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn given_non_http_url_when_validated_then_rejected() {
    let config = RegistryConfig {
        base_url: "ftp://registry.example.com".to_string(),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("ftp://registry.example.com"));
}

#[test]
fn given_timeout_bounds_when_validated_then_inclusive_range() {
    let at = |timeout_secs| RegistryConfig {
        timeout_secs,
        ..Default::default()
    };

    assert!(at(1).validate().is_ok());
    assert!(at(600).validate().is_ok());
    assert!(at(601).validate().is_err());
}

#[test]
fn given_default_path_when_available_then_ends_with_file_name() {
    if let Some(path) = RegistryConfig::default_path() {
        assert!(path.ends_with("registry-client/registry.toml"));
    }
}

/// **VALUE**: Verifies environment variables override file or default values.
///
/// **WHY THIS MATTERS**: Deployments point the client at a registry without shipping a file.
///
/// **BUG THIS CATCHES**: Would catch the override reading the wrong variable names.
#[test]
#[serial]
fn given_env_vars_when_overrides_applied_then_fields_replaced() {
    clear_env();
    // SAFETY: serialized with the other env tests.
    unsafe {
        std::env::set_var(ENV_BASE_URL, "http://registry.internal:8081/apis/registry/v3");
        std::env::set_var(ENV_TIMEOUT_SECS, " 45 ");
    }

    let mut config = RegistryConfig::default();
    let result = config.apply_env_overrides();
    clear_env();

    result.unwrap();
    assert_eq!(config.base_url, "http://registry.internal:8081/apis/registry/v3");
    assert_eq!(config.timeout_secs, 45);
}

#[test]
#[serial]
fn given_non_numeric_timeout_env_when_overrides_applied_then_env_error() {
    clear_env();
    // SAFETY: serialized with the other env tests.
    unsafe {
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");
    }

    let mut config = RegistryConfig::default();
    let result = config.apply_env_overrides();
    clear_env();

    match result {
        Err(ConfigError::EnvError { name, reason, .. }) => {
            assert_eq!(name, ENV_TIMEOUT_SECS);
            assert!(reason.contains("soon"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
#[serial]
fn given_no_env_vars_when_loaded_from_env_then_defaults() {
    clear_env();

    let config = RegistryConfig::from_env().unwrap();

    assert_eq!(config.base_url, REGISTRY_DEFAULT_BASE_URL);
}
