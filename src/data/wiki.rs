//! Fetcher for the wiki page feed.
//!
//! The wiki site publishes a JSON array of every page with its title, keywords,
//! relative URL and content. The feed is generated by the site build, so a missing
//! field is treated as a generator bug and fails the whole fetch instead of
//! silently dropping pages.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    data::http::fetch_text,
    error::{format::FormatError, AppError},
    model::wiki::WikiPage,
};

#[derive(Debug, Deserialize)]
struct WikiRecord {
    title: String,
    keywords: Vec<String>,
    url: String,
    content: String,
}

/// Fetches and decodes the wiki feed.
#[derive(Clone)]
pub struct WikiFeedFetcher {
    /// HTTP client used for the feed request
    http_client: reqwest::Client,
    /// URL of the JSON feed
    api_url: String,
}

impl WikiFeedFetcher {
    /// Creates a new WikiFeedFetcher.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_url` - URL of the JSON page feed
    pub fn new(http_client: reqwest::Client, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.to_string(),
        }
    }

    /// Fetches all wiki pages.
    ///
    /// # Returns
    /// - `Ok(Vec<WikiPage>)` - Pages in feed order
    /// - `Err(AppError::FetchErr)` - Feed could not be retrieved
    /// - `Err(AppError::FormatErr)` - Feed is not an array or a page lacks a field
    pub async fn fetch_pages(&self) -> Result<Vec<WikiPage>, AppError> {
        let body = fetch_text(&self.http_client, &self.api_url, "application/json").await?;

        Ok(parse_pages(&body, &self.api_url)?)
    }
}

/// Decodes the wiki feed.
///
/// # Arguments
/// - `body` - JSON array of page objects
/// - `resource` - Name of the resource for error messages
pub fn parse_pages(body: &str, resource: &str) -> Result<Vec<WikiPage>, FormatError> {
    let root: Value = serde_json::from_str(body).map_err(|source| FormatError::InvalidJson {
        resource: resource.to_string(),
        source,
    })?;

    let Value::Array(nodes) = root else {
        return Err(FormatError::NotAnArray {
            resource: resource.to_string(),
        });
    };

    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            serde_json::from_value::<WikiRecord>(node)
                .map(|record| WikiPage {
                    title: record.title,
                    keywords: record.keywords,
                    path: record.url,
                    content: record.content,
                })
                .map_err(|source| FormatError::InvalidRecord {
                    resource: resource.to_string(),
                    index,
                    source,
                })
        })
        .collect()
}
