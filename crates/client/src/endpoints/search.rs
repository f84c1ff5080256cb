//! File event search endpoint.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::auth::AuthToken;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{QueryPayload, SearchPage};
use ffs_config::constants::FILE_EVENT_SEARCH_PATH;

/// POST one query and decode the page it returns.
pub async fn search_file_events(
    client: &Client,
    base_url: &str,
    token: &AuthToken,
    payload: &QueryPayload,
) -> Result<SearchPage> {
    debug!(page = payload.page_number(), "Searching file events");

    let url = format!("{}{}", base_url, FILE_EVENT_SEARCH_PATH);
    let builder = client
        .post(&url)
        .header(AUTHORIZATION, token.header_value())
        .json(payload);
    let response = send_request(builder).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to decode search page: {e}")))
}
