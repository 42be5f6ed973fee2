//! Shared HTTP plumbing for the provider clients.
//!
//! Every provider call is a single attempt bounded by [`REQUEST_TIMEOUT`].
//! Status handling is the same for all providers, so it lives here rather
//! than being repeated in each client.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::enrichment::domain::EnrichmentError;

/// Upper bound for one provider request, connect through body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent string sent to every provider
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Build the HTTP client shared by the provider clients
///
/// The client is configured to:
/// - Give up after [`REQUEST_TIMEOUT`]
/// - Accept gzip-compressed responses
/// - Send a User-Agent identifying the application
pub fn build_client() -> Result<reqwest::Client, EnrichmentError> {
    build_client_with_timeout(REQUEST_TIMEOUT)
}

pub(crate) fn build_client_with_timeout(
    timeout: Duration,
) -> Result<reqwest::Client, EnrichmentError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| EnrichmentError::Client(e.to_string()))
}

/// Send a request and decode a JSON body
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, EnrichmentError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            EnrichmentError::Network(format!("request timed out: {}", e))
        } else {
            EnrichmentError::Network(e.to_string())
        }
    })?;

    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(EnrichmentError::RateLimited);
    }

    if !status.is_success() {
        return Err(EnrichmentError::Network(format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| EnrichmentError::Parse(e.to_string()))
}
