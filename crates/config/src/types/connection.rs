//! Connection configuration types for the FFS search tool.
//!
//! Responsibilities:
//! - Define connection settings (STS and search endpoints, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and credentials.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Endpoint URLs are absolute http(s) URLs without a trailing slash.
//! - Duration fields are serialized as seconds (integers).

use crate::constants::{DEFAULT_BASE_HOST, DEFAULT_STS_HOST, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Endpoint and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Identity (STS) endpoint, e.g. `https://sts-east.us.code42.com`
    pub sts_url: String,
    /// Forensic File Search endpoint, e.g. `https://forensicsearch-east.us.code42.com`
    pub base_url: String,
    /// Whether to skip TLS verification (for intercepting proxies in test labs)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            sts_url: format!("https://{}", DEFAULT_STS_HOST),
            base_url: format!("https://{}", DEFAULT_BASE_HOST),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Login credentials
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the default Code42 endpoints with the given user.
    pub fn with_username(username: String) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                username,
                password: None,
            },
        }
    }
}
