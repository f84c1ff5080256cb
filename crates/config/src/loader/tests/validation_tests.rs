//! Validation tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test endpoint validation (scheme, host, blank values).
//! - Test timeout bounds.

use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn loader() -> ConfigLoader {
    ConfigLoader::new().with_username("analyst@example.com".to_string())
}

#[test]
fn test_blank_sts_url_is_missing_endpoint() {
    let result = loader().with_sts_url("   ".to_string()).build();
    match result {
        Err(ConfigError::MissingEndpoint { var }) => assert_eq!(var, "sts_url"),
        other => panic!("Expected MissingEndpoint, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_http_scheme_rejected() {
    let result = loader()
        .with_base_url("ftp://forensicsearch-east.us.code42.com".to_string())
        .build();
    match result {
        Err(ConfigError::InvalidValue { var, message }) => {
            assert_eq!(var, "base_url");
            assert!(message.contains("ftp"), "message was: {message}");
        }
        other => panic!("Expected InvalidValue, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unparseable_host_rejected() {
    let result = loader().with_base_url("exa mple.com".to_string()).build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, .. }) if var == "base_url"
    ));
}

#[test]
fn test_zero_timeout_rejected() {
    let result = loader().with_timeout(Duration::from_secs(0)).build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_above_maximum_rejected() {
    let result = loader().with_timeout(Duration::from_secs(3601)).build();
    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("3600"), "message was: {message}");
        }
        other => panic!("Expected InvalidTimeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_timeout_at_maximum_accepted() {
    let config = loader()
        .with_timeout(Duration::from_secs(3600))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout, Duration::from_secs(3600));
}
