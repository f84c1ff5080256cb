//! Credentials and bearer tokens.
//!
//! Responsibilities:
//! - Hold the username/password pair used for the STS token exchange.
//! - Abstract where a password comes from behind [`CredentialProvider`].
//! - Hold the `v3_user_token` returned by the STS.
//!
//! Does NOT handle:
//! - The HTTP exchange itself (see `endpoints::auth`).
//! - Interactive prompting (the CLI supplies its own provider).
//!
//! Invariants:
//! - Passwords and tokens are `SecretString` and never appear in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// A username/password pair for the STS login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting a blank username.
    pub fn new(username: impl Into<String>, password: SecretString) -> Result<Self> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(ClientError::Validation(
                "username must not be empty".to_string(),
            ));
        }
        Ok(Self { username, password })
    }
}

/// Source of credentials for a login.
///
/// Called once per login. Implementations may block (e.g. to prompt on a
/// terminal); the caller decides where that is acceptable.
pub trait CredentialProvider {
    fn resolve(&self) -> Result<Credentials>;
}

/// Credentials known up front (from flags, env, profile, or a test).
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Result<Self> {
        Ok(Self {
            credentials: Credentials::new(username, password)?,
        })
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialProvider for StaticCredentials {
    fn resolve(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }
}

/// Bearer token issued by the STS, sent as `authorization: v3_user_token <token>`.
#[derive(Debug, Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn new(token: String) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Value for the `authorization` header.
    pub(crate) fn header_value(&self) -> String {
        format!("v3_user_token {}", self.0.expose_secret())
    }
}
