//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources every
//! command needs. The state is built once during startup and cloned into the
//! Discord event handler; each command builds its short-lived services from
//! references into it.
//!
//! The state includes:
//! - The latest-version resolver and its cache
//! - Fetchers for the JavaDoc indexes and the wiki feed
//! - The paginator with the embed budgets
//! - Channel restriction and thumbnail settings

use std::sync::Arc;

use crate::{
    config::{ChannelRestriction, Config},
    data::{javadoc::DocIndexFetcher, version::VersionResolver, wiki::WikiFeedFetcher},
    service::paginate::{EmbedPaginator, PaginationBudget},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - The fetchers hold a `reqwest::Client`, which uses an `Arc` internally
/// - `VersionResolver` shares its cache between clones
/// - `EmbedPaginator` is wrapped in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Resolves and caches the latest library release.
    pub version_resolver: VersionResolver,

    /// Fetches the JavaDoc search indexes.
    pub doc_fetcher: DocIndexFetcher,

    /// Fetches the wiki page feed.
    pub wiki_fetcher: WikiFeedFetcher,

    /// Renders search results into size-bounded blocks.
    pub paginator: Arc<EmbedPaginator>,

    /// Guild and channel text commands are confined to.
    pub restriction: ChannelRestriction,

    /// Thumbnail of informational responses.
    pub icon_url: Option<String>,
}

impl AppState {
    /// Creates a new AppState from configuration.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `http_client` - Shared HTTP client, cloned into every fetcher
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            version_resolver: VersionResolver::new(
                http_client.clone(),
                &config.latest_version_url,
                config.latest_version_format,
            ),
            doc_fetcher: DocIndexFetcher::new(
                http_client.clone(),
                &config.javadoc_static_url,
                &config.javadoc_link_url,
            ),
            wiki_fetcher: WikiFeedFetcher::new(http_client, &config.wiki_api_url),
            paginator: Arc::new(EmbedPaginator::new(
                PaginationBudget::default(),
                &config.wiki_base_url,
                config.icon_url.clone(),
            )),
            restriction: config.restriction,
            icon_url: config.icon_url.clone(),
        }
    }
}
