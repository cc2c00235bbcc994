//! JavaDoc search index fixtures.
//!
//! The generator emits each index as a one-line script assigning a JSON array to a
//! variable, optionally followed by a call refreshing the search results. The
//! fixtures reproduce that framing so the assignment stripping is exercised.

use serde_json::{json, Value};

/// Wraps index entries in the generator's variable assignment.
///
/// # Arguments
/// - `variable` - Name of the assigned variable
/// - `entries` - Index entries
pub fn script(variable: &str, entries: &[Value]) -> String {
    format!(
        "{} = {};updateSearchResults();",
        variable,
        Value::Array(entries.to_vec())
    )
}

/// Creates a type index from `(package, class)` pairs.
///
/// A package-less "All Classes" entry is appended, as the generator does.
///
/// # Arguments
/// - `types` - `(package, class)` pairs
pub fn type_index(types: &[(&str, &str)]) -> String {
    let mut entries: Vec<Value> = types
        .iter()
        .map(|(package, name)| json!({ "p": package, "l": name }))
        .collect();
    entries.push(json!({ "l": "All Classes", "u": "allclasses-index.html" }));

    script("typeSearchIndex", &entries)
}

/// Creates a member index from `(package, class, member)` triples.
///
/// Entries carry no explicit anchor, so anchors are derived from the signature.
///
/// # Arguments
/// - `members` - `(package, class, member signature)` triples
pub fn member_index(members: &[(&str, &str, &str)]) -> String {
    let entries: Vec<Value> = members
        .iter()
        .map(|(package, class, name)| member(package, class, name))
        .collect();

    script("memberSearchIndex", &entries)
}

/// Creates a single member index entry without an explicit anchor.
pub fn member(package: &str, class: &str, name: &str) -> Value {
    json!({ "p": package, "c": class, "l": name })
}

/// Creates a single member index entry with an explicit anchor.
pub fn member_with_url(package: &str, class: &str, name: &str, url: &str) -> Value {
    json!({ "p": package, "c": class, "l": name, "url": url })
}
