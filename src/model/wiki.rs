//! Domain model for wiki pages.

use std::cmp::Ordering;

/// A page of the wiki as published in the wiki feed.
///
/// Pages order by title (case-sensitive). Remaining fields only break ties so that
/// sorting a feed snapshot always yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikiPage {
    /// Title of the page.
    pub title: String,
    /// Keywords the page is tagged with.
    pub keywords: Vec<String>,
    /// Path of the page relative to the wiki's base URL, e.g. `/wiki/basic-tutorials/`.
    pub path: String,
    /// Page content, possibly containing HTML.
    pub content: String,
}

impl WikiPage {
    /// Returns the absolute URL of the page.
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the wiki site, without trailing slash
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }

    /// Returns a markdown link `[title](url)` to the page.
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the wiki site, without trailing slash
    pub fn markdown_link(&self, base_url: &str) -> String {
        format!("[{}]({})", self.title, self.url(base_url))
    }
}

impl Ord for WikiPage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.keywords.cmp(&other.keywords))
            .then_with(|| self.content.cmp(&other.content))
    }
}

impl PartialOrd for WikiPage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
