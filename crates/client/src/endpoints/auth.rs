//! STS authentication endpoints.

use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{LoginConfiguration, LoginUserResponse};
use ffs_config::constants::{LOGIN_CONFIGURATION_PATH, LOGIN_USER_PATH};

/// Look up how `username` is allowed to log in.
pub async fn get_login_configuration(
    client: &Client,
    sts_url: &str,
    username: &str,
) -> Result<LoginConfiguration> {
    debug!("Fetching login configuration for {}", username);

    let url = format!("{}{}", sts_url, LOGIN_CONFIGURATION_PATH);
    let builder = client.get(&url).query(&[("username", username)]);
    let response = send_request(builder).await.map_err(into_auth_error)?;

    response.json().await.map_err(|e| {
        ClientError::auth(format!("Unreadable login configuration response: {e}"))
    })
}

/// Exchange username and password for a `v3_user_token`.
pub async fn login_user(client: &Client, sts_url: &str, credentials: &Credentials) -> Result<String> {
    debug!("Requesting v3 user token for {}", credentials.username);

    let url = format!("{}{}", sts_url, LOGIN_USER_PATH);
    let builder = client
        .get(&url)
        .query(&[("username", credentials.username.as_str())])
        .basic_auth(
            &credentials.username,
            Some(credentials.password.expose_secret()),
        );
    let response = send_request(builder).await.map_err(into_auth_error)?;

    let body: LoginUserResponse = response
        .json()
        .await
        .map_err(|e| ClientError::auth(format!("Unreadable login response: {e}")))?;

    body.v3_user_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ClientError::auth("Missing v3_user_token in login response"))
}

/// STS failures are authentication failures whatever the status.
fn into_auth_error(err: ClientError) -> ClientError {
    match err {
        ClientError::SearchRequest {
            status, message, ..
        } => ClientError::Authentication {
            status: Some(status),
            message,
        },
        other => other,
    }
}
