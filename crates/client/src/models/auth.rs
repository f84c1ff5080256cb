//! Response models for the STS login endpoints.

use serde::Deserialize;

/// Answer to the login configuration lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginConfiguration {
    pub login_type: String,
}

/// Answer to the token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUserResponse {
    pub v3_user_token: Option<String>,
}
