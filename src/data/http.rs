use dioxus_logger::tracing;

use crate::error::fetch::FetchError;

/// Fetches a remote text resource.
///
/// Issues a GET request and returns the body as text. Non-success status codes and
/// blank bodies are treated as transport failures.
///
/// # Arguments
/// - `client` - Shared HTTP client
/// - `url` - URL of the resource
/// - `accept` - Value of the `Accept` header
///
/// # Returns
/// - `Ok(String)` - Response body
/// - `Err(FetchError::Request)` - The request could not be completed
/// - `Err(FetchError::Status)` - The remote host answered with a non-success status
/// - `Err(FetchError::EmptyBody)` - The response body was blank
pub async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    accept: &str,
) -> Result<String, FetchError> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, accept)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody {
            url: url.to_string(),
        });
    }

    Ok(body)
}
