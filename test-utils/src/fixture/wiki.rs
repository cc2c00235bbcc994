//! Wiki feed fixtures.

use serde_json::{json, Value};

/// Creates a wiki feed entry.
///
/// # Arguments
/// - `title` - Page title
/// - `keywords` - Keywords the page is tagged with
/// - `url` - Path of the page relative to the wiki base URL
/// - `content` - Page content
pub fn page(title: &str, keywords: &[&str], url: &str, content: &str) -> Value {
    json!({
        "title": title,
        "keywords": keywords,
        "url": url,
        "content": content,
    })
}

/// Creates a wiki feed from entries built with [`page`].
pub fn feed(pages: &[Value]) -> String {
    Value::Array(pages.to_vec()).to_string()
}
