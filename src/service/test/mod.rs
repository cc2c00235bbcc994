use crate::{
    config::VersionFormat,
    data::{javadoc::DocIndexFetcher, version::VersionResolver, wiki::WikiFeedFetcher},
    model::{
        display::{DisplayBlock, ERROR_COLOR},
        javadoc::{DocClass, DocMethod},
        search::{DocSearchType, DocsQuery, WikiQuery, WikiSearchCriteria},
        wiki::WikiPage,
    },
    service::{
        docs::DocsService,
        info::{HelpEntry, InfoService},
        paginate::{EmbedPaginator, PaginationBudget, SearchResults},
        search::{search_classes, search_methods, search_pages, MethodGroup},
        wiki::WikiService,
    },
    util::text::char_len,
};
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError, fixture};

mod docs;
mod search;

const API_BASE: &str = "https://javadoc.io/doc/org.javacord/javacord-api/latest/";
const LINK_URL: &str = "https://javadoc.io/doc/org.javacord";
const WIKI_BASE_URL: &str = "https://javacord.org";

fn paginator() -> EmbedPaginator {
    EmbedPaginator::new(PaginationBudget::default(), WIKI_BASE_URL, None)
}

fn method(package: &str, class: &str, name: &str) -> DocMethod {
    DocMethod::new(
        API_BASE,
        name.to_string(),
        class.to_string(),
        package.to_string(),
        None,
    )
}

fn class(package: &str, name: &str) -> DocClass {
    DocClass::new(API_BASE, name.to_string(), package.to_string())
}

fn page(title: &str, keywords: &[&str], content: &str) -> WikiPage {
    WikiPage {
        title: title.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        path: format!("/wiki/{}/", title.to_lowercase().replace(' ', "-")),
        content: content.to_string(),
    }
}

/// Sums the characters of every field name and value of a block.
fn field_chars(block: &DisplayBlock) -> usize {
    block
        .fields
        .iter()
        .map(|field| char_len(&field.name) + char_len(&field.value))
        .sum()
}

/// Extracts `N` from a trailing `N more ...` marker.
fn more_count(text: &str) -> Option<usize> {
    let marker = text.strip_suffix(" more ...")?;
    let digits: String = marker
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}
