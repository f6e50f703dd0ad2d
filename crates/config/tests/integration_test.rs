//! Integration tests for configuration loading as the CLI drives it.

use std::time::Duration;

use es_config::{ConfigError, ConfigLoader, SnapshotRepository, env_var_or_none};

/// Values set via builder methods (simulating CLI args) produce a complete config.
#[test]
fn test_config_loader_cli_overrides() {
    let config = ConfigLoader::new()
        .with_endpoint("http://cli-override:9200/".to_string())
        .with_repository("nightly".to_string())
        .with_days(14)
        .with_timeout(Duration::from_secs(60))
        .build()
        .expect("should build with CLI overrides");

    assert_eq!(config.connection.endpoint, "http://cli-override:9200");
    assert_eq!(config.connection.timeout, Duration::from_secs(60));
    assert_eq!(config.retention.days, 14);
    assert_eq!(
        config.retention.repository,
        SnapshotRepository::Named("nightly".to_string())
    );
}

#[test]
fn test_skip_sentinel_is_recognized() {
    let config = ConfigLoader::new()
        .with_endpoint("http://localhost:9200".to_string())
        .with_repository("-".to_string())
        .build()
        .unwrap();

    assert_eq!(config.retention.repository, SnapshotRepository::Skip);
    assert_eq!(config.retention.repository.name(), None);
}

#[test]
fn test_missing_required_values_fail_before_anything_else() {
    let err = ConfigLoader::new().build().unwrap_err();
    assert!(matches!(err, ConfigError::MissingEndpoint));
    assert!(err.to_string().contains("endpoint must be provided"));

    let err = ConfigLoader::new()
        .with_endpoint("http://localhost:9200".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingRepository));
    assert!(err.to_string().contains("use - to skip snapshots"));
}

/// env_var_or_none is exported from the crate root.
#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("ES_JANITOR_ENDPOINT");
}
