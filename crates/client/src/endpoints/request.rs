//! Single-attempt HTTP request helper.
//!
//! Sends a request exactly once and turns non-2xx responses into
//! [`ClientError::SearchRequest`] carrying the status, URL, and body.
//! Callers outside the search path re-map that error to their own kind.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Longest response body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 2048;

/// Sends an HTTP request without retrying.
///
/// # Errors
///
/// Returns `ClientError::Http` for transport failures and
/// `ClientError::SearchRequest` for non-2xx responses.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    debug!(status = status.as_u16(), url = %url, "Request returned an error status");

    Err(ClientError::SearchRequest {
        status: status.as_u16(),
        url,
        message: error_message(status, body),
    })
}

fn error_message(status: reqwest::StatusCode, body: String) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string();
    }
    if body.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{truncated}...");
    }
    body.to_string()
}
