//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, profile files, and direct builder methods.
//! - Build the final `Config` and `SearchDefaultConfig` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Profile file loading logic (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over profile file values, even when
//!   `from_profile()` runs after `from_env()`.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::SearchDefaultConfig;
use super::env::apply_env;
use super::error::ConfigError;
use super::profile::apply_profile;
use crate::constants::{
    DEFAULT_BASE_HOST, DEFAULT_STS_HOST, DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE, MAX_RESULTS_LIMIT,
    MAX_TIMEOUT_SECS, SOURCE_NAMES,
};
use crate::types::{AuthConfig, Config, ConnectionConfig, ProfileConfig};

/// Configuration loader that builds config from environment variables and profiles.
pub struct ConfigLoader {
    sts_url: Option<String>,
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
    source: Option<String>,
    page_size: Option<u32>,
    max_results: Option<u32>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            sts_url: None,
            base_url: None,
            username: None,
            password: None,
            skip_verify: None,
            timeout: None,
            profile_name: None,
            profile_missing: None,
            config_path: None,
            source: None,
            page_size: None,
            max_results: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the active profile name to load from the config file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from a profile in the config file.
    ///
    /// If the profile is not found, this records the missing profile name
    /// for later error handling in `build()`.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over profile settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the identity (STS) host or URL.
    pub fn with_sts_url(mut self, url: String) -> Self {
        self.sts_url = Some(url);
        self
    }

    /// Set the search host or URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the default event source.
    pub fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the result cap.
    pub fn with_max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Check if env vars or flags supplied everything the profile would have.
    fn has_complete_config(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(ref profile_name) = self.profile_missing
            && !self.has_complete_config()
        {
            return Err(ConfigError::ProfileNotFound(profile_name.clone()));
        }

        let sts_url = validate_and_normalize_endpoint(
            "sts_url",
            self.sts_url.as_deref().unwrap_or(DEFAULT_STS_HOST),
        )?;
        let base_url = validate_and_normalize_endpoint(
            "base_url",
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_HOST),
        )?;

        let username = self
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUsername)?;

        let connection = ConnectionConfig {
            sts_url,
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self::validate_timeout_config(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig {
                username,
                password: self.password,
            },
        })
    }

    /// Validates the request timeout: greater than 0 and at most `MAX_TIMEOUT_SECS`.
    fn validate_timeout_config(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    /// Build the search default configuration from loaded values.
    ///
    /// Unset values fall back to [`SearchDefaultConfig::default`].
    pub fn build_search_defaults(&self) -> Result<SearchDefaultConfig, ConfigError> {
        let defaults = SearchDefaultConfig::default();

        let source = self
            .source
            .as_deref()
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or(defaults.source);
        if !SOURCE_NAMES.contains(&source.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "source".into(),
                message: format!("must be one of {}, got: {source}", SOURCE_NAMES.join(", ")),
            });
        }

        let page_size = self.page_size.unwrap_or(defaults.page_size);
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ConfigError::InvalidValue {
                var: "page_size".into(),
                message: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }

        let max_results = self.max_results.unwrap_or(defaults.max_results);
        if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
            return Err(ConfigError::InvalidValue {
                var: "max_results".into(),
                message: format!("must be between 1 and {MAX_RESULTS_LIMIT}"),
            });
        }

        Ok(SearchDefaultConfig {
            source,
            page_size,
            max_results,
        })
    }

    /// Get the source if set via profile, environment, or builder.
    pub fn source(&self) -> Option<&String> {
        self.source.as_ref()
    }

    /// Get the page size if set via profile, environment, or builder.
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Get the max results if set via profile, environment, or builder.
    pub fn max_results(&self) -> Option<u32> {
        self.max_results
    }

    /// Profile selected via `with_profile_name` or `FFS_PROFILE`.
    pub(crate) fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_profile_name(&mut self, name: Option<String>) {
        self.profile_name = name;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_profile_missing(&mut self, name: Option<String>) {
        self.profile_missing = name;
    }

    pub(crate) fn set_sts_url(&mut self, url: Option<String>) {
        self.sts_url = url;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    pub(crate) fn set_page_size(&mut self, size: Option<u32>) {
        self.page_size = size;
    }

    pub(crate) fn set_max_results(&mut self, max_results: Option<u32>) {
        self.max_results = max_results;
    }

    /// Fill unset fields from a profile. Values already present are kept.
    pub(crate) fn merge_profile(&mut self, profile: &ProfileConfig) -> Result<(), ConfigError> {
        fill(&mut self.sts_url, &profile.sts_url);
        fill(&mut self.base_url, &profile.base_url);
        fill(&mut self.username, &profile.username);
        fill(&mut self.skip_verify, &profile.skip_verify);
        fill(&mut self.source, &profile.source);
        fill(&mut self.page_size, &profile.page_size);
        fill(&mut self.max_results, &profile.max_results);
        if self.timeout.is_none() {
            self.timeout = profile.timeout_seconds.map(Duration::from_secs);
        }
        // Keyring lookups only happen when nothing else supplied a password.
        if self.password.is_none()
            && let Some(password) = &profile.password
        {
            self.password = Some(password.resolve()?);
        }
        Ok(())
    }
}

fn fill<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if slot.is_none() {
        *slot = value.clone();
    }
}

/// Validates and normalizes an endpoint given as a bare host or a full URL.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingEndpoint))
/// - Prefix `https://` when no scheme is present
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_endpoint(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingEndpoint { var: var.into() });
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidValue {
        var: var.into(),
        message: format!(
            "must be a host name or an absolute http(s) URL (e.g. sts-east.us.code42.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: "host is required (e.g. sts-east.us.code42.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
