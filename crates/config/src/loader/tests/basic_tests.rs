//! Basic loader tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test default endpoints and timeout.
//! - Test bare host and full URL handling.
//! - Test the missing username error.

use std::time::Duration;

use secrecy::ExposeSecret;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_loader_defaults_to_code42_east_endpoints() {
    let config = ConfigLoader::new()
        .with_username("analyst@example.com".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.sts_url, "https://sts-east.us.code42.com");
    assert_eq!(
        config.connection.base_url,
        "https://forensicsearch-east.us.code42.com"
    );
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert!(!config.connection.skip_verify);
    assert!(config.auth.password.is_none());
}

#[test]
fn test_loader_prefixes_https_for_bare_hosts() {
    let config = ConfigLoader::new()
        .with_username("analyst@example.com".to_string())
        .with_sts_url("sts-west.us.code42.com".to_string())
        .with_base_url("forensicsearch-west.us.code42.com".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.sts_url, "https://sts-west.us.code42.com");
    assert_eq!(
        config.connection.base_url,
        "https://forensicsearch-west.us.code42.com"
    );
}

#[test]
fn test_loader_accepts_full_urls_with_port() {
    let config = ConfigLoader::new()
        .with_username("analyst@example.com".to_string())
        .with_sts_url("http://127.0.0.1:8080/".to_string())
        .with_base_url("http://127.0.0.1:8081".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.sts_url, "http://127.0.0.1:8080");
    assert_eq!(config.connection.base_url, "http://127.0.0.1:8081");
}

#[test]
fn test_loader_keeps_password_when_given() {
    let config = ConfigLoader::new()
        .with_username("analyst@example.com".to_string())
        .with_password("hunter2".to_string())
        .build()
        .unwrap();

    let password = config.auth.password.expect("password should be set");
    assert_eq!(password.expose_secret(), "hunter2");
}

#[test]
fn test_loader_missing_username() {
    let result = ConfigLoader::new().build();
    assert!(matches!(result, Err(ConfigError::MissingUsername)));
}

#[test]
fn test_loader_blank_username_is_missing() {
    let result = ConfigLoader::new().with_username("   ".to_string()).build();
    assert!(matches!(result, Err(ConfigError::MissingUsername)));
}
