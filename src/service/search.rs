//! Case-insensitive substring search over fetched documentation and wiki records.
//!
//! Matching is plain containment of the lowercased term in the lowercased text; there
//! is no tokenization and no ranking. Every result ordering is total, so searching
//! the same snapshot twice yields the same sequence no matter how the fetched sets
//! were iterated.

use std::collections::HashMap;

use crate::{
    model::{
        javadoc::{DocClass, DocMethod},
        search::WikiSearchCriteria,
        wiki::WikiPage,
    },
    util::text::char_len,
};

/// Matching members of one declaring type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodGroup {
    /// Simple name of the declaring type.
    pub class_name: String,
    /// Matching members, sorted by shortened name.
    pub methods: Vec<DocMethod>,
}

/// Searches members by their full name and groups them by declaring type.
///
/// # Arguments
/// - `methods` - Members of every fetched module
/// - `term` - Search term, matched against `package.Class#member`
/// - `include_all` - Whether members of internal packages are kept
///
/// # Returns
/// - `Vec<MethodGroup>` - Groups sorted case-insensitively by type name, each with
///   its members sorted case-insensitively by shortened name and overloads sharing a
///   shortened name ordered shortest signature first
pub fn search_methods(
    methods: impl IntoIterator<Item = DocMethod>,
    term: &str,
    include_all: bool,
) -> Vec<MethodGroup> {
    let term = term.to_lowercase();

    let mut by_class: HashMap<String, Vec<DocMethod>> = HashMap::new();
    for method in methods {
        if !include_all && method.is_internal() {
            continue;
        }
        if !method.full_name().to_lowercase().contains(&term) {
            continue;
        }
        by_class
            .entry(method.class_name.clone())
            .or_default()
            .push(method);
    }

    let mut groups: Vec<MethodGroup> = by_class
        .into_iter()
        .map(|(class_name, mut methods)| {
            methods.sort_by_cached_key(|method| {
                let shortened = method.shortened_name();
                (
                    shortened.to_lowercase(),
                    shortened,
                    char_len(&method.name),
                    method.full_url(),
                )
            });
            MethodGroup {
                class_name,
                methods,
            }
        })
        .collect();

    groups.sort_by(|a, b| {
        a.class_name
            .to_lowercase()
            .cmp(&b.class_name.to_lowercase())
            .then_with(|| a.class_name.cmp(&b.class_name))
    });

    groups
}

/// Searches types by their simple name.
///
/// # Arguments
/// - `classes` - Types of every fetched module
/// - `term` - Search term, matched against the simple name
/// - `include_all` - Whether types of internal packages are kept
///
/// # Returns
/// - `Vec<DocClass>` - Matches sorted by name length, then case-insensitively by name,
///   then by package
pub fn search_classes(
    classes: impl IntoIterator<Item = DocClass>,
    term: &str,
    include_all: bool,
) -> Vec<DocClass> {
    let term = term.to_lowercase();

    let mut matches: Vec<DocClass> = classes
        .into_iter()
        .filter(|class| include_all || !class.is_internal())
        .filter(|class| class.name.to_lowercase().contains(&term))
        .collect();

    matches.sort_by_cached_key(|class| {
        (
            class.name.chars().count(),
            class.name.to_lowercase(),
            class.name.clone(),
            class.package_name.clone(),
            class.base_url.clone(),
        )
    });

    matches
}

/// Searches wiki pages with the enabled criteria combined by logical OR.
///
/// A page matches if any enabled criterion matches; with no criterion enabled
/// nothing matches.
///
/// # Arguments
/// - `pages` - Pages of the wiki feed
/// - `term` - Search term
/// - `criteria` - Parts of the pages to search in
///
/// # Returns
/// - `Vec<WikiPage>` - Matches in page order (by title)
pub fn search_pages(
    pages: impl IntoIterator<Item = WikiPage>,
    term: &str,
    criteria: WikiSearchCriteria,
) -> Vec<WikiPage> {
    let term = term.to_lowercase();

    let mut matches: Vec<WikiPage> = pages
        .into_iter()
        .filter(|page| page_matches(page, &term, criteria))
        .collect();
    matches.sort();

    matches
}

fn page_matches(page: &WikiPage, term: &str, criteria: WikiSearchCriteria) -> bool {
    (criteria.keywords
        && page
            .keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(term)))
        || (criteria.titles && page.title.to_lowercase().contains(term))
        || (criteria.contents && page.content.to_lowercase().contains(term))
}
