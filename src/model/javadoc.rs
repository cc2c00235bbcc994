//! Domain models for generated API documentation entries.
//!
//! Defines the class and method records produced from a JavaDoc search index. Both
//! are immutable and rebuilt from a live fetch for every search.

use regex::Regex;
use std::sync::LazyLock;

use crate::util::text::{char_len, truncate_chars};

/// Matches a parenthesized parameter list, greedy from the first `(` to the last `)`.
static PARAMETER_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.+\)").expect("parameter list pattern is valid"));

/// Names longer than this get their parameter list elided.
const ELIDE_PARAMETERS_ABOVE: usize = 40;

/// Names still longer than this after elision are hard-truncated.
const TRUNCATE_ABOVE: usize = 45;

/// Number of characters kept when hard-truncating, before the ellipsis.
const TRUNCATED_PREFIX: usize = 42;

/// Returns whether a package is, or is nested under, an `internal` segment.
///
/// # Arguments
/// - `package_name` - Dotted package name, e.g. `org.javacord.core.internal`
///
/// # Returns
/// - `true` - Any segment of the package is exactly `internal`
/// - `false` - The package is part of the public API
pub fn is_internal_package(package_name: &str) -> bool {
    package_name.split('.').any(|segment| segment == "internal")
}

/// Converts a dotted package name into a URL path.
fn package_path(package_name: &str) -> String {
    package_name.replace('.', "/")
}

/// A documented type (class, interface, enum, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocClass {
    /// Simple name of the type.
    pub name: String,
    /// Package the type lives in.
    pub package_name: String,
    /// Base URL of the documentation module, ending with `/`.
    pub base_url: String,
}

impl DocClass {
    /// Creates a class entry.
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the documentation module
    /// - `name` - Simple name of the type
    /// - `package_name` - Package the type lives in
    pub fn new(base_url: &str, name: String, package_name: String) -> Self {
        Self {
            name,
            package_name,
            base_url: base_url.to_string(),
        }
    }

    /// Returns the link to the type's documentation page.
    pub fn full_url(&self) -> String {
        format!(
            "{}{}/{}.html",
            self.base_url,
            package_path(&self.package_name),
            self.name
        )
    }

    /// Returns whether the type lives in an internal package.
    pub fn is_internal(&self) -> bool {
        is_internal_package(&self.package_name)
    }
}

/// A documented member (method, field, constructor) of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocMethod {
    /// Member signature as shown in the index, e.g. `addListener(Consumer)`.
    pub name: String,
    /// Simple name of the declaring type.
    pub class_name: String,
    /// Package of the declaring type.
    pub package_name: String,
    /// Anchor of the member on the type's documentation page.
    pub url_fragment: String,
    /// Base URL of the documentation module, ending with `/`.
    pub base_url: String,
}

impl DocMethod {
    /// Creates a member entry.
    ///
    /// When the index entry carries no explicit anchor, it is derived from the
    /// signature by replacing both parentheses with `-`.
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the documentation module
    /// - `name` - Member signature
    /// - `class_name` - Simple name of the declaring type
    /// - `package_name` - Package of the declaring type
    /// - `url_fragment` - Explicit anchor, if the index provided one
    pub fn new(
        base_url: &str,
        name: String,
        class_name: String,
        package_name: String,
        url_fragment: Option<String>,
    ) -> Self {
        let url_fragment = url_fragment.unwrap_or_else(|| name.replace(['(', ')'], "-"));

        Self {
            name,
            class_name,
            package_name,
            url_fragment,
            base_url: base_url.to_string(),
        }
    }

    /// Returns `package.Class#member`, the text searched by the docs command.
    pub fn full_name(&self) -> String {
        format!("{}.{}#{}", self.package_name, self.class_name, self.name)
    }

    /// Returns a display name short enough for list entries.
    ///
    /// Names above 40 characters get their parameter list replaced by `(...)`;
    /// names still above 45 characters are cut to 42 characters plus `...`.
    pub fn shortened_name(&self) -> String {
        let mut name = self.name.clone();
        if char_len(&name) > ELIDE_PARAMETERS_ABOVE {
            name = PARAMETER_LIST.replace_all(&name, "(...)").into_owned();
        }
        if char_len(&name) > TRUNCATE_ABOVE {
            name = format!("{}...", truncate_chars(&name, TRUNCATED_PREFIX));
        }
        name
    }

    /// Returns the link to the member's anchor on its type's documentation page.
    pub fn full_url(&self) -> String {
        format!(
            "{}{}/{}.html#{}",
            self.base_url,
            package_path(&self.package_name),
            self.class_name,
            self.url_fragment
        )
    }

    /// Returns whether the declaring type lives in an internal package.
    pub fn is_internal(&self) -> bool {
        is_internal_package(&self.package_name)
    }
}
