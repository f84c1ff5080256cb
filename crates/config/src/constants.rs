//! Centralized constants for the FFS search workspace.
//!
//! This module contains default values and API limits used across crates to
//! avoid magic number duplication.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default identity (STS) host used to obtain `v3_user_token` bearer tokens.
pub const DEFAULT_STS_HOST: &str = "sts-east.us.code42.com";

/// Default Forensic File Search API host.
pub const DEFAULT_BASE_HOST: &str = "forensicsearch-east.us.code42.com";

/// Path of the file event search endpoint, relative to the search host.
pub const FILE_EVENT_SEARCH_PATH: &str = "/forensic-search/queryservice/api/v1/fileevent";

/// Path of the login configuration lookup, relative to the STS host.
pub const LOGIN_CONFIGURATION_PATH: &str = "/api/v1/LoginConfiguration";

/// Path of the token exchange, relative to the STS host.
pub const LOGIN_USER_PATH: &str = "/api/v1/login-user";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Search Limits & Defaults
// =============================================================================

/// Maximum number of values accepted in a single structured query.
pub const MAX_SEARCH_VALUES: usize = 1024;

/// Largest page size the search API accepts.
pub const MAX_PAGE_SIZE: u32 = 10_000;

/// Default page size for search requests.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest number of events a single run may collect.
pub const MAX_RESULTS_LIMIT: u32 = 10_000;

/// Default cap on the number of events collected across all pages.
pub const DEFAULT_MAX_RESULTS: u32 = 10_000;

/// Default event source restriction (no restriction).
pub const DEFAULT_SOURCE: &str = "all";

/// Recognized event source names.
pub const SOURCE_NAMES: [&str; 4] = ["google", "onedrive", "endpoint", "all"];

/// Login type that supports username/password token exchange.
pub const LOCAL_LOGIN_TYPE: &str = "LOCAL";
