//! Rendering of search results into size-bounded display blocks.
//!
//! Discord rejects embeds above fixed character limits, so every listing here is
//! built first-fit: entries are appended in order until the next one, together with
//! the "N more" marker that would have to follow it, no longer fits. The marker
//! always reports exactly the number of entries left out.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    model::{display::DisplayBlock, javadoc::DocClass, wiki::WikiPage},
    service::search::MethodGroup,
    util::text::{char_len, decimal_digits, truncate_chars},
};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("HTML tag pattern is valid"));

static END_OF_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?: |\r?\n)").expect("sentence end pattern is valid"));

const DOCS_TITLE: &str = "Javacord Docs";
const WIKI_TITLE: &str = "Javacord Wiki";

/// Length of `• ` plus ` more ...`, excluding the count.
const MORE_METHODS_OVERHEAD: usize = 11;

/// Length of the "more classes" field name and body, excluding the count.
const MORE_CLASSES_OVERHEAD: usize = 57;

/// Length of `\nand ` plus ` more ...`, excluding the count.
const MORE_CLASS_LINKS_OVERHEAD: usize = 14;

/// Length of `and ` plus ` more ...`, excluding the count.
const MORE_PAGES_OVERHEAD: usize = 13;

/// Character budgets applied while rendering.
///
/// The defaults are the platform ceilings minus a safety margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationBudget {
    /// Maximum length of one grouped-member field body.
    pub max_field_chars: usize,
    /// Maximum total length of all field names and bodies of a member listing.
    pub max_total_chars: usize,
    /// Maximum number of fields of a member listing.
    pub max_fields: usize,
    /// Maximum length of the class link list.
    pub max_class_list_chars: usize,
    /// Maximum length of the wiki page list.
    pub max_page_list_chars: usize,
    /// Maximum number of sentences of a page preview.
    pub preview_sentences: usize,
    /// Once a preview reaches this length no further sentence is added.
    pub preview_soft_chars: usize,
    /// Absolute maximum length of a preview excerpt.
    pub preview_hard_chars: usize,
}

impl Default for PaginationBudget {
    fn default() -> Self {
        Self {
            max_field_chars: 1000,
            max_total_chars: 5900,
            max_fields: 25,
            max_class_list_chars: 1950,
            max_page_list_chars: 1900,
            preview_sentences: 3,
            preview_soft_chars: 600,
            preview_hard_chars: 1500,
        }
    }
}

/// Search outcome to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    /// Docs command without a search term.
    DocsOverview,
    /// Wiki command without a search term.
    WikiOverview,
    /// Member search matches.
    Methods(Vec<MethodGroup>),
    /// Class search matches.
    Classes(Vec<DocClass>),
    /// Wiki search matches.
    Pages(Vec<WikiPage>),
}

/// Renders search results into display blocks.
#[derive(Debug, Clone)]
pub struct EmbedPaginator {
    budget: PaginationBudget,
    /// Base URL of the wiki site, without trailing slash
    wiki_base_url: String,
    /// Thumbnail applied to every rendered block
    icon_url: Option<String>,
}

impl EmbedPaginator {
    /// Creates a new EmbedPaginator.
    ///
    /// # Arguments
    /// - `budget` - Character budgets to enforce
    /// - `wiki_base_url` - Base URL wiki page paths are appended to
    /// - `icon_url` - Optional thumbnail for every block
    pub fn new(budget: PaginationBudget, wiki_base_url: &str, icon_url: Option<String>) -> Self {
        Self {
            budget,
            wiki_base_url: wiki_base_url.to_string(),
            icon_url,
        }
    }

    /// Renders search results.
    ///
    /// Empty results render the "nothing found" block of the respective search, one
    /// wiki page renders a preview of its content and everything else a listing.
    ///
    /// # Arguments
    /// - `results` - Search outcome, already sorted
    ///
    /// # Returns
    /// - `DisplayBlock` - Block within every configured budget
    pub fn render(&self, results: &SearchResults) -> DisplayBlock {
        let block = DisplayBlock::new().thumbnail(self.icon_url.as_deref());

        match results {
            SearchResults::DocsOverview => block
                .title(DOCS_TITLE)
                .field("Overview", "https://docs.javacord.org/")
                .field(
                    "Latest release version JavaDoc",
                    "https://docs.javacord.org/api/v/latest",
                ),
            SearchResults::WikiOverview => block.title(WIKI_TITLE).description(format!(
                "The [Javacord Wiki]({}/wiki) is an excellent resource to get you started with Javacord.\n",
                self.wiki_base_url
            )),
            SearchResults::Methods(groups) if groups.is_empty() => block
                .title("Methods")
                .description("No matching methods found!"),
            SearchResults::Methods(groups) => self.render_methods(block, groups),
            SearchResults::Classes(classes) if classes.is_empty() => block
                .title("Classes")
                .description("No matching classes found!"),
            SearchResults::Classes(classes) => self.render_classes(block, classes),
            SearchResults::Pages(pages) => match pages.as_slice() {
                [] => block
                    .title(WIKI_TITLE)
                    .url(format!("{}/wiki/", self.wiki_base_url))
                    .description(
                        "No pages found. Maybe try another search or tweak the search parameters.",
                    ),
                [page] => self.render_page_preview(block, page),
                pages => self.render_page_list(block, pages),
            },
        }
    }

    /// One field per declaring type, each listing its members.
    fn render_methods(&self, mut block: DisplayBlock, groups: &[MethodGroup]) -> DisplayBlock {
        let mut total = 0;
        for (index, group) in groups.iter().enumerate() {
            let body = self.method_field_body(group);

            let remaining = groups.len() - index - 1;
            let (reserve_chars, reserve_fields) = if remaining == 0 {
                (0, 0)
            } else {
                (MORE_CLASSES_OVERHEAD + decimal_digits(remaining), 1)
            };

            let cost = char_len(&group.class_name) + char_len(&body);
            let fits_text = total + cost + reserve_chars <= self.budget.max_total_chars;
            let fits_fields = block.fields.len() + 1 + reserve_fields <= self.budget.max_fields;

            if fits_text && fits_fields {
                block = block.field(group.class_name.clone(), body);
                total += cost;
            } else {
                return block.field(
                    format!("And **{}** more classes ...", groups.len() - index),
                    "Maybe try a less generic search?",
                );
            }
        }

        block
    }

    fn method_field_body(&self, group: &MethodGroup) -> String {
        let count = group.methods.len();

        let mut body = String::new();
        let mut body_chars = 0;
        for (index, method) in group.methods.iter().enumerate() {
            let line = format!("• [{}]({})\n", method.shortened_name(), method.full_url());

            let remaining = count - index - 1;
            let reserve = if remaining == 0 {
                0
            } else {
                MORE_METHODS_OVERHEAD + decimal_digits(remaining)
            };

            let line_chars = char_len(&line);
            if body_chars + line_chars + reserve < self.budget.max_field_chars {
                body.push_str(&line);
                body_chars += line_chars;
            } else {
                body.push_str(&format!("• {} more ...", count - index));
                break;
            }
        }

        body
    }

    /// Comma separated class links in the description.
    fn render_classes(&self, block: DisplayBlock, classes: &[DocClass]) -> DisplayBlock {
        let mut list = String::new();
        let mut list_chars = 0;
        let mut rendered = 0;
        for (index, class) in classes.iter().enumerate() {
            let separator = if index == 0 { "" } else { ", " };
            let entry = format!("{}[{}]({})", separator, class.name, class.full_url());

            let remaining = classes.len() - index - 1;
            let reserve = if remaining == 0 {
                0
            } else {
                MORE_CLASS_LINKS_OVERHEAD + decimal_digits(remaining)
            };

            let entry_chars = char_len(&entry);
            if list_chars + entry_chars + reserve > self.budget.max_class_list_chars {
                break;
            }
            list.push_str(&entry);
            list_chars += entry_chars;
            rendered += 1;
        }

        if rendered < classes.len() {
            list.push_str(&format!("\nand {} more ...", classes.len() - rendered));
        }

        block.title("Classes").description(list)
    }

    /// One line per page in the description.
    fn render_page_list(&self, block: DisplayBlock, pages: &[WikiPage]) -> DisplayBlock {
        let mut list = String::new();
        let mut list_chars = 0;
        let mut rendered = 0;
        for (index, page) in pages.iter().enumerate() {
            let line = format!("• {}\n", page.markdown_link(&self.wiki_base_url));

            let remaining = pages.len() - index - 1;
            let reserve = if remaining == 0 {
                0
            } else {
                MORE_PAGES_OVERHEAD + decimal_digits(remaining)
            };

            let line_chars = char_len(&line);
            if list_chars + line_chars + reserve > self.budget.max_page_list_chars {
                break;
            }
            list.push_str(&line);
            list_chars += line_chars;
            rendered += 1;
        }

        if rendered < pages.len() {
            list.push_str(&format!("and {} more ...", pages.len() - rendered));
        }

        block
            .title(WIKI_TITLE)
            .url(format!("{}/wiki/", self.wiki_base_url))
            .description(list)
    }

    /// Title link plus the first sentences of the page.
    fn render_page_preview(&self, block: DisplayBlock, page: &WikiPage) -> DisplayBlock {
        let url = page.url(&self.wiki_base_url);
        let content = HTML_TAG.replace_all(&page.content, "");
        let content = content.trim();

        let excerpt = self.preview_excerpt(content);

        let mut description = format!("**[{}]({})**\n\n{}", page.title, url, excerpt.trim_end());
        if char_len(excerpt) < char_len(content) {
            description.push_str(&format!("\n\n[*view full page*]({})", url));
        }

        block.title(WIKI_TITLE).description(description)
    }

    /// Cuts the cleaned content after at most the configured number of sentences.
    ///
    /// Sentences are added while the excerpt is shorter than the soft limit. Content
    /// without any sentence end is taken whole. The hard limit applies last and
    /// overrides sentence boundaries.
    fn preview_excerpt<'a>(&self, content: &'a str) -> &'a str {
        let mut end = 0;
        let mut sentences = 0;
        while char_len(&content[..end]) < self.budget.preview_soft_chars
            && sentences < self.budget.preview_sentences
        {
            match END_OF_SENTENCE.find_at(content, end) {
                Some(found) => {
                    end = found.end();
                    sentences += 1;
                }
                None => break,
            }
        }

        let excerpt = if sentences == 0 { content } else { &content[..end] };
        truncate_chars(excerpt, self.budget.preview_hard_chars)
    }
}
