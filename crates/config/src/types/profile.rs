//! Named profile settings stored in the config file.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named connection profiles.
//! - Support partial configuration (all fields optional).
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - The password field uses `SecureValue` for flexible secret storage.

use crate::types::auth::SecureValue;
use serde::{Deserialize, Serialize};

/// Profile configuration for storing named connection profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Identity (STS) host or URL
    pub sts_url: Option<String>,
    /// Search API host or URL
    pub base_url: Option<String>,
    /// Username for the token exchange
    pub username: Option<String>,
    /// Password for the token exchange
    pub password: Option<SecureValue>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Default event source restriction
    pub source: Option<String>,
    /// Default page size
    pub page_size: Option<u32>,
    /// Default cap on collected events
    pub max_results: Option<u32>,
}
