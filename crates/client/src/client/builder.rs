//! Client builder for constructing [`FfsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing endpoints (bare hosts gain `https://`, trailing slashes dropped)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`FfsClient`] methods)
//! - Obtaining a token (see `session.rs`)
//!
//! # Invariants
//! - Endpoints default to the Code42 US east hosts
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::client::FfsClient;
use crate::error::{ClientError, Result};
use ffs_config::{
    Config,
    constants::{DEFAULT_BASE_HOST, DEFAULT_MAX_REDIRECTS, DEFAULT_STS_HOST, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`FfsClient`].
pub struct FfsClientBuilder {
    sts_url: Option<String>,
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for FfsClientBuilder {
    fn default() -> Self {
        Self {
            sts_url: None,
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FfsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity (STS) host or URL.
    pub fn sts_url(mut self, url: String) -> Self {
        self.sts_url = Some(url);
        self
    }

    /// Set the search host or URL.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Disabling TLS verification makes the connection vulnerable to
    /// man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.sts_url = Some(config.connection.sts_url.clone());
        self.base_url = Some(config.connection.base_url.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Turn a bare host or URL into `scheme://host[:port][/path]` without a trailing slash.
    ///
    /// # Examples
    ///
    /// - `"sts-east.us.code42.com"` -> `"https://sts-east.us.code42.com"`
    /// - `"http://127.0.0.1:8080/"` -> `"http://127.0.0.1:8080"`
    fn normalize_endpoint(name: &str, raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClientError::InvalidUrl(format!("{name} is required")));
        }

        let candidate = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let parsed = url::Url::parse(&candidate)
            .map_err(|e| ClientError::InvalidUrl(format!("{name} is not a valid URL: {e}")))?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "{name} must use http or https, got: {scheme}"
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!("{name} has no host")));
        }

        Ok(parsed.as_str().trim_end_matches('/').to_string())
    }

    /// Build the [`FfsClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for a blank endpoint or unsupported scheme.
    /// Returns `ClientError::Http` if the HTTP client fails to build.
    pub fn build(self) -> Result<FfsClient> {
        let sts_url = Self::normalize_endpoint(
            "sts_url",
            self.sts_url.as_deref().unwrap_or(DEFAULT_STS_HOST),
        )?;
        let base_url = Self::normalize_endpoint(
            "base_url",
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_HOST),
        )?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if sts_url.starts_with("https://") || base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(FfsClient {
            http,
            sts_url,
            base_url,
            token: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_username("analyst@example.com".to_string());
        config.connection.sts_url = "https://sts-west.us.code42.com".to_string();
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = FfsClient::builder().from_config(&config);

        assert_eq!(
            builder.sts_url,
            Some("https://sts-west.us.code42.com".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));

        let client = builder.build().unwrap();
        assert_eq!(client.sts_url(), "https://sts-west.us.code42.com");
    }

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(
            FfsClientBuilder::normalize_endpoint("sts_url", "sts-east.us.code42.com").unwrap(),
            "https://sts-east.us.code42.com"
        );
    }

    #[test]
    fn test_normalize_trailing_slashes() {
        assert_eq!(
            FfsClientBuilder::normalize_endpoint("base_url", "http://127.0.0.1:8080//").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        let err = FfsClientBuilder::normalize_endpoint("base_url", "ftp://example.com").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_normalize_rejects_unparseable_hosts() {
        for raw in ["https://", "http://exa mple.com", "https://host:99999"] {
            let err = FfsClientBuilder::normalize_endpoint("base_url", raw).unwrap_err();
            assert!(
                matches!(err, ClientError::InvalidUrl(ref m) if m.contains("base_url")),
                "{raw} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_normalize_keeps_port_and_path() {
        assert_eq!(
            FfsClientBuilder::normalize_endpoint("base_url", "search.example.com:8443/api/").unwrap(),
            "https://search.example.com:8443/api"
        );
    }

    #[test]
    fn test_normalize_rejects_blank() {
        let err = FfsClientBuilder::normalize_endpoint("sts_url", "  ").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(ref m) if m.contains("sts_url")));
    }
}
