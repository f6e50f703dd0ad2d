//! Environment variable tests for the configuration loader builder.

use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::SnapshotRepository;

const ALL_VARS: [&str; 7] = [
    "ES_JANITOR_ENDPOINT",
    "ES_JANITOR_REPOSITORY",
    "ES_JANITOR_DAYS",
    "ES_JANITOR_TIMEOUT",
    "ES_JANITOR_SKIP_VERIFY",
    "ES_JANITOR_USERNAME",
    "ES_JANITOR_PASSWORD",
];

/// Every known variable, unset unless listed in `overrides`.
fn env_with(
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    ALL_VARS
        .iter()
        .map(|key| {
            let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
            (*key, value)
        })
        .collect()
}

#[test]
#[serial]
fn test_env_populates_config() {
    let vars = env_with(&[
        ("ES_JANITOR_ENDPOINT", "http://es.internal:9200/"),
        ("ES_JANITOR_REPOSITORY", "s3-backups"),
        ("ES_JANITOR_DAYS", "7"),
        ("ES_JANITOR_TIMEOUT", "45"),
        ("ES_JANITOR_SKIP_VERIFY", "true"),
    ]);

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

        assert_eq!(config.connection.endpoint, "http://es.internal:9200");
        assert!(config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(45));
        assert!(config.connection.auth.is_none());
        assert_eq!(config.retention.days, 7);
        assert_eq!(
            config.retention.repository,
            SnapshotRepository::Named("s3-backups".to_string())
        );
    });
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let vars = env_with(&[
        ("ES_JANITOR_ENDPOINT", "http://from-env:9200"),
        ("ES_JANITOR_REPOSITORY", "env-repo"),
        ("ES_JANITOR_DAYS", "7"),
    ]);

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_endpoint("http://from-cli:9200".to_string())
            .with_repository("-".to_string())
            .with_days(3)
            .build()
            .unwrap();

        assert_eq!(config.connection.endpoint, "http://from-cli:9200");
        assert!(config.retention.repository.is_skip());
        assert_eq!(config.retention.days, 3);
    });
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let vars = env_with(&[
        ("ES_JANITOR_ENDPOINT", ""),
        ("ES_JANITOR_REPOSITORY", "   "),
    ]);

    temp_env::with_vars(vars, || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingEndpoint)));
    });
}

#[test]
#[serial]
fn test_invalid_days_env_var() {
    let vars = env_with(&[("ES_JANITOR_DAYS", "-3")]);

    temp_env::with_vars(vars, || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ES_JANITOR_DAYS"),
            Err(e) => panic!("Expected InvalidValue, got {:?}", e),
            Ok(_) => panic!("Expected InvalidValue, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_env_var() {
    let vars = env_with(&[("ES_JANITOR_SKIP_VERIFY", "maybe")]);

    temp_env::with_vars(vars, || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}

#[test]
#[serial]
fn test_basic_auth_from_env() {
    let vars = env_with(&[
        ("ES_JANITOR_ENDPOINT", "https://es.internal:9200"),
        ("ES_JANITOR_REPOSITORY", "-"),
        ("ES_JANITOR_USERNAME", "elastic"),
        ("ES_JANITOR_PASSWORD", "changeme"),
    ]);

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        let auth = config.connection.auth.expect("auth should be configured");
        assert_eq!(auth.username, "elastic");
        assert_eq!(auth.password.expose_secret(), "changeme");
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_is_noop() {
    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
