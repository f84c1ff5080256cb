//! Main FFS API client.
//!
//! This module provides the primary [`FfsClient`], which holds one HTTP
//! connection pool, the two API endpoints, and the bearer token obtained at
//! login.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and token handling
//! - `search`: Counting and paginated search
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Payload validation (delegated to [`crate::payload`])
//!
//! # Invariants
//! - Searches require a token; nothing is retried.
//! - Pages are requested strictly one after another.

pub mod builder;
mod search;
mod session;

pub use search::FetchedPage;

use crate::auth::AuthToken;

/// Forensic File Search API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use ffs_client::{FfsClient, StaticCredentials};
///
/// let mut client = FfsClient::builder()
///     .sts_url("sts-east.us.code42.com".to_string())
///     .base_url("forensicsearch-east.us.code42.com".to_string())
///     .build()?;
/// client.authenticate(&StaticCredentials::new("analyst@example.com", password)?).await?;
/// let results = client.execute(&payload, 500).await?;
/// ```
#[derive(Debug)]
pub struct FfsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) sts_url: String,
    pub(crate) base_url: String,
    pub(crate) token: Option<AuthToken>,
}

impl FfsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::FfsClientBuilder {
        builder::FfsClientBuilder::new()
    }

    /// Get the identity (STS) endpoint.
    pub fn sts_url(&self) -> &str {
        &self.sts_url
    }

    /// Get the search endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
