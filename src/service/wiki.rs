use dioxus_logger::tracing;

use crate::{
    data::wiki::WikiFeedFetcher,
    error::AppError,
    model::{display::DisplayBlock, search::WikiQuery},
    service::{
        paginate::{EmbedPaginator, SearchResults},
        search::search_pages,
    },
};

/// Service answering the wiki command.
pub struct WikiService<'a> {
    /// Fetches the page feed
    wiki_fetcher: &'a WikiFeedFetcher,
    /// Renders the matches
    paginator: &'a EmbedPaginator,
}

impl<'a> WikiService<'a> {
    /// Creates a new WikiService.
    ///
    /// # Arguments
    /// - `wiki_fetcher` - Wiki feed fetcher
    /// - `paginator` - Result renderer
    pub fn new(wiki_fetcher: &'a WikiFeedFetcher, paginator: &'a EmbedPaginator) -> Self {
        Self {
            wiki_fetcher,
            paginator,
        }
    }

    /// Answers a wiki command invocation.
    ///
    /// Without a search term the wiki overview is returned. A single match is shown
    /// as a preview of the page, several matches as a list of links.
    ///
    /// # Arguments
    /// - `query` - Search term and the parts of the pages to search in
    ///
    /// # Returns
    /// - `DisplayBlock` - Overview, preview, listing, "no pages" notice or error block
    pub async fn execute(&self, query: &WikiQuery) -> DisplayBlock {
        match self.find(query).await {
            Ok(results) => self.paginator.render(&results),
            Err(e) => e.into_display_block("wiki"),
        }
    }

    async fn find(&self, query: &WikiQuery) -> Result<SearchResults, AppError> {
        let Some(term) = query.search_term.as_deref() else {
            return Ok(SearchResults::WikiOverview);
        };

        tracing::debug!("Searching wiki for '{}' ({:?})", term, query.criteria);

        let pages = self.wiki_fetcher.fetch_pages().await?;

        Ok(SearchResults::Pages(search_pages(pages, term, query.criteria)))
    }
}
