//! Login and token handling for [`FfsClient`].
//!
//! # What this module does NOT handle:
//! - Where credentials come from (see [`CredentialProvider`])
//! - Direct HTTP calls (handled by endpoint functions in `endpoints/`)
//!
//! # Invariants
//! - One login attempt per call; failures are returned, never retried.
//! - Only `LOCAL` login configurations can exchange a password for a token.
//! - The token is only ever set by a successful `authenticate` call.

use tracing::{debug, info};

use crate::auth::{AuthToken, CredentialProvider};
use crate::client::FfsClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use ffs_config::constants::LOCAL_LOGIN_TYPE;

impl FfsClient {
    /// Log in through the STS and keep the resulting token for later searches.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] if the login type is not `LOCAL`,
    /// the STS rejects the request, or the response carries no token.
    /// Returns [`ClientError::Validation`] if the provider yields a blank username.
    pub async fn authenticate(&mut self, provider: &dyn CredentialProvider) -> Result<AuthToken> {
        let credentials = provider.resolve()?;

        let login_config =
            endpoints::get_login_configuration(&self.http, &self.sts_url, &credentials.username)
                .await?;
        if !login_config.login_type.eq_ignore_ascii_case(LOCAL_LOGIN_TYPE) {
            return Err(ClientError::auth(format!(
                "login type {} is not supported; only {} accounts can log in with a password",
                login_config.login_type, LOCAL_LOGIN_TYPE
            )));
        }
        debug!(login_type = %login_config.login_type, "Login configuration accepted");

        let raw = endpoints::login_user(&self.http, &self.sts_url, &credentials).await?;
        let token = AuthToken::new(raw);
        self.token = Some(token.clone());
        info!(username = %credentials.username, "Authenticated");

        Ok(token)
    }

    /// Whether a token is available for searches.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The current token, or an authentication error if there is none.
    pub(crate) fn require_token(&self) -> Result<&AuthToken> {
        self.token
            .as_ref()
            .ok_or_else(|| ClientError::auth("not logged in; authenticate before searching"))
    }
}
