//! Search parameter types shared by the command adapters and the services.

use std::fmt;

/// A named partition of the generated API documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocModule {
    /// The public API artifact.
    Api,
    /// The implementation artifact, searched only when all results are requested.
    Core,
}

impl DocModule {
    /// Returns the module name used in documentation URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Core => "core",
        }
    }
}

impl fmt::Display for DocModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the docs command searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocSearchType {
    /// Type names, rendered as a flat list of links.
    Classes,
    /// Member signatures, rendered grouped by declaring type.
    #[default]
    Members,
}

impl DocSearchType {
    /// Returns the option value used by the slash command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::Members => "members",
        }
    }

    /// Parses the option value used by the slash command.
    pub fn from_option(value: &str) -> Option<Self> {
        match value {
            "classes" => Some(Self::Classes),
            "members" => Some(Self::Members),
            _ => None,
        }
    }
}

/// Parameters of a docs command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocsQuery {
    /// Term to search for. `None` requests the overview.
    pub search_term: Option<String>,
    /// Whether to search classes or members.
    pub search_type: DocSearchType,
    /// Whether to also search the core module and internal packages.
    pub include_all: bool,
}

/// Which parts of a wiki page a search term is matched against.
///
/// Enabled criteria combine with logical OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikiSearchCriteria {
    /// Match against any of the page's keywords.
    pub keywords: bool,
    /// Match against the page title.
    pub titles: bool,
    /// Match against the page content.
    pub contents: bool,
}

impl Default for WikiSearchCriteria {
    fn default() -> Self {
        Self {
            keywords: true,
            titles: true,
            contents: false,
        }
    }
}

/// Parameters of a wiki command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WikiQuery {
    /// Term to search for. `None` requests the overview.
    pub search_term: Option<String>,
    /// Parts of the pages to search in.
    pub criteria: WikiSearchCriteria,
}
