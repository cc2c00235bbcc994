use crate::error::{config::ConfigError, AppError};

/// Builds the HTTP client shared by every fetcher.
///
/// The client identifies itself with the crate name and version. It keeps the
/// reqwest defaults otherwise, so requests have no timeout of their own.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready to be cloned into the fetchers
/// - `Err(AppError::ConfigErr)` - The TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(ConfigError::HttpClient)?;

    Ok(client)
}
