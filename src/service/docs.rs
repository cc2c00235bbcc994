use dioxus_logger::tracing;
use std::collections::HashSet;

use crate::{
    data::{javadoc::DocIndexFetcher, version::VersionResolver},
    error::AppError,
    model::{
        display::DisplayBlock,
        search::{DocModule, DocSearchType, DocsQuery},
    },
    service::{
        paginate::{EmbedPaginator, SearchResults},
        search::{search_classes, search_methods},
    },
};

/// Service answering the docs command.
///
/// Resolves the latest version, fetches the JavaDoc search indexes of that version,
/// searches them and renders the matches. Indexes are fetched fresh for every
/// invocation.
pub struct DocsService<'a> {
    /// Supplies the version whose indexes are fetched
    version_resolver: &'a VersionResolver,
    /// Fetches the api and core indexes
    doc_fetcher: &'a DocIndexFetcher,
    /// Renders the matches
    paginator: &'a EmbedPaginator,
}

impl<'a> DocsService<'a> {
    /// Creates a new DocsService.
    ///
    /// # Arguments
    /// - `version_resolver` - Latest version lookup
    /// - `doc_fetcher` - JavaDoc index fetcher
    /// - `paginator` - Result renderer
    pub fn new(
        version_resolver: &'a VersionResolver,
        doc_fetcher: &'a DocIndexFetcher,
        paginator: &'a EmbedPaginator,
    ) -> Self {
        Self {
            version_resolver,
            doc_fetcher,
            paginator,
        }
    }

    /// Answers a docs command invocation.
    ///
    /// Without a search term the docs overview is returned. Failures are logged and
    /// rendered as the error block, so this never fails.
    ///
    /// # Arguments
    /// - `query` - Search term, search type and include-all flag
    ///
    /// # Returns
    /// - `DisplayBlock` - Overview, matches, "no matches" notice or error block
    pub async fn execute(&self, query: &DocsQuery) -> DisplayBlock {
        match self.find(query).await {
            Ok(results) => self.paginator.render(&results),
            Err(e) => e.into_display_block("docs"),
        }
    }

    async fn find(&self, query: &DocsQuery) -> Result<SearchResults, AppError> {
        let Some(term) = query.search_term.as_deref() else {
            return Ok(SearchResults::DocsOverview);
        };

        tracing::debug!(
            "Searching docs for '{}' ({}, include all: {})",
            term,
            query.search_type.as_str(),
            query.include_all
        );

        let version = self.version_resolver.resolve_version().await;
        if version.is_empty() {
            return Err(AppError::InternalError(
                "The latest Javacord version is unknown".to_string(),
            ));
        }

        let results = match query.search_type {
            DocSearchType::Members => {
                let methods = if query.include_all {
                    let (api, core) = tokio::try_join!(
                        self.doc_fetcher.fetch_methods(DocModule::Api, &version),
                        self.doc_fetcher.fetch_methods(DocModule::Core, &version),
                    )?;
                    union(api, core)
                } else {
                    self.doc_fetcher
                        .fetch_methods(DocModule::Api, &version)
                        .await?
                };

                SearchResults::Methods(search_methods(methods, term, query.include_all))
            }
            DocSearchType::Classes => {
                let classes = if query.include_all {
                    let (api, core) = tokio::try_join!(
                        self.doc_fetcher.fetch_classes(DocModule::Api, &version),
                        self.doc_fetcher.fetch_classes(DocModule::Core, &version),
                    )?;
                    union(api, core)
                } else {
                    self.doc_fetcher
                        .fetch_classes(DocModule::Api, &version)
                        .await?
                };

                SearchResults::Classes(search_classes(classes, term, query.include_all))
            }
        };

        Ok(results)
    }
}

fn union<T: Eq + std::hash::Hash>(mut first: HashSet<T>, second: HashSet<T>) -> HashSet<T> {
    first.extend(second);
    first
}
