//! Latest release version lookup with an in-memory fallback.
//!
//! The dependency snippets and the JavaDoc index URLs need the latest published
//! library version. Every lookup refreshes the cached value; if the lookup fails the
//! last successfully resolved version is used instead, so a flaky endpoint only
//! ever makes the answer stale, never missing.

use dioxus_logger::tracing;
use quick_xml::events::Event;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    config::VersionFormat,
    data::http::fetch_text,
    error::{format::FormatError, AppError},
};

/// Resolves and caches the latest release version.
///
/// Clones share the cached value. Concurrent lookups may race to update it; the
/// last writer wins, which is fine since every writer stores a freshly fetched value.
#[derive(Clone)]
pub struct VersionResolver {
    /// HTTP client used for the version request
    http_client: reqwest::Client,
    /// URL of the version document
    url: String,
    /// Shape of the version document
    format: VersionFormat,
    /// Last successfully resolved version, empty until the first success
    latest: Arc<RwLock<String>>,
}

impl VersionResolver {
    /// Creates a new VersionResolver with an empty cache.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `url` - URL of the version document
    /// - `format` - Shape of the version document
    pub fn new(http_client: reqwest::Client, url: &str, format: VersionFormat) -> Self {
        Self {
            http_client,
            url: url.to_string(),
            format,
            latest: Arc::new(RwLock::new(String::new())),
        }
    }

    /// Resolves the latest release version.
    ///
    /// Fetches the version document and updates the cache. On any failure the error
    /// is logged and the cached value is returned instead.
    ///
    /// # Returns
    /// - `String` - Latest version, last known version, or an empty string if no
    ///   lookup has ever succeeded
    pub async fn resolve_version(&self) -> String {
        match self.fetch_latest().await {
            Ok(version) => {
                *self.latest.write().await = version.clone();
                version
            }
            Err(e) => {
                let cached = self.cached_version().await;
                match &e {
                    AppError::FetchErr(err) => tracing::warn!(
                        "Error while requesting the latest version, using '{}': {}",
                        cached,
                        err
                    ),
                    err => tracing::error!(
                        "Latest version result differs from expectation, using '{}': {}",
                        cached,
                        err
                    ),
                }
                cached
            }
        }
    }

    /// Returns the cached version without performing a lookup.
    pub async fn cached_version(&self) -> String {
        self.latest.read().await.clone()
    }

    async fn fetch_latest(&self) -> Result<String, AppError> {
        let accept = match self.format {
            VersionFormat::Json => "application/json",
            VersionFormat::Xml => "application/xml",
        };
        let body = fetch_text(&self.http_client, &self.url, accept).await?;

        let version = match self.format {
            VersionFormat::Json => parse_json_version(&body, &self.url)?,
            VersionFormat::Xml => parse_xml_version(&body, &self.url)?,
        };

        Ok(version)
    }

    /// Creates a resolver whose cache already holds `version`.
    #[cfg(test)]
    pub fn with_cached_version(
        http_client: reqwest::Client,
        url: &str,
        format: VersionFormat,
        version: &str,
    ) -> Self {
        Self {
            latest: Arc::new(RwLock::new(version.to_string())),
            ..Self::new(http_client, url, format)
        }
    }

    /// Creates a resolver pointing at `url` that shares this resolver's cache.
    #[cfg(test)]
    pub fn with_url(&self, url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..self.clone()
        }
    }
}

/// Extracts the version from `{"number": "x.y.z (#n)"}`.
///
/// Only the first whitespace-separated token is kept, turning `x.y.z (#n)` into `x.y.z`.
pub fn parse_json_version(body: &str, resource: &str) -> Result<String, FormatError> {
    let root: Value = serde_json::from_str(body).map_err(|source| FormatError::InvalidJson {
        resource: resource.to_string(),
        source,
    })?;

    let Value::Object(fields) = root else {
        return Err(FormatError::NotAnObject {
            resource: resource.to_string(),
        });
    };

    fields
        .get("number")
        .and_then(Value::as_str)
        .and_then(|number| number.split_whitespace().next())
        .map(str::to_string)
        .ok_or_else(|| FormatError::MissingVersion {
            resource: resource.to_string(),
        })
}

/// Extracts the text of the first `<latest>` element.
///
/// The whole document is read before the version is returned, so a document that
/// breaks off or closes the wrong element is rejected instead of half-trusted.
pub fn parse_xml_version(body: &str, resource: &str) -> Result<String, FormatError> {
    let invalid = |reason: String| FormatError::InvalidXml {
        resource: resource.to_string(),
        reason,
    };

    let mut reader = quick_xml::Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut in_latest = false;
    let mut latest: Option<String> = None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => in_latest = e.local_name().as_ref() == b"latest",
            Ok(Event::Text(text)) if in_latest && latest.is_none() => {
                let version = text
                    .unescape()
                    .map_err(|e| invalid(e.to_string()))?
                    .trim()
                    .to_string();

                if !version.is_empty() {
                    latest = Some(version);
                }
            }
            Ok(Event::End(_)) => in_latest = false,
            Ok(Event::Eof) => break,
            Err(e) => return Err(invalid(e.to_string())),
            _ => {}
        }
    }

    latest.ok_or_else(|| FormatError::MissingVersion {
        resource: resource.to_string(),
    })
}
