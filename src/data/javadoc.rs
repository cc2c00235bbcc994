//! Fetcher for JavaDoc search indexes.
//!
//! The JavaDoc generator publishes two search indexes per artifact version:
//! `type-search-index.js` listing every type and `member-search-index.js` listing
//! every member. Each is a JSON array wrapped in a JavaScript variable assignment
//! (`typeSearchIndex = [...]`), which is stripped before parsing.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::{
    data::http::fetch_text,
    error::{format::FormatError, AppError},
    model::{
        javadoc::{DocClass, DocMethod},
        search::DocModule,
    },
};

const TYPE_INDEX_FILE: &str = "type-search-index.js";
const MEMBER_INDEX_FILE: &str = "member-search-index.js";

/// Entry of the type index. Entries without a package are package or module nodes
/// and are skipped.
#[derive(Debug, Deserialize)]
struct TypeRecord {
    #[serde(rename = "l")]
    name: Option<String>,
    #[serde(rename = "p")]
    package_name: Option<String>,
}

/// Entry of the member index. Every field except the anchor is required.
#[derive(Debug, Deserialize)]
struct MemberRecord {
    #[serde(rename = "l")]
    name: String,
    #[serde(rename = "c")]
    class_name: String,
    #[serde(rename = "p")]
    package_name: String,
    #[serde(default, alias = "u")]
    url: Option<String>,
}

/// Fetches and decodes the search indexes of one documentation deployment.
#[derive(Clone)]
pub struct DocIndexFetcher {
    /// HTTP client used for the index requests
    http_client: reqwest::Client,
    /// Base URL the index files are served from, without trailing slash
    static_url: String,
    /// Base URL result links point to, without trailing slash
    link_url: String,
}

impl DocIndexFetcher {
    /// Creates a new DocIndexFetcher.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `static_url` - Base URL serving `javacord-{module}/{version}/*.js`
    /// - `link_url` - Base URL of the browsable docs, `javacord-{module}/latest/` is appended
    pub fn new(http_client: reqwest::Client, static_url: &str, link_url: &str) -> Self {
        Self {
            http_client,
            static_url: static_url.to_string(),
            link_url: link_url.to_string(),
        }
    }

    /// Fetches every type of a module version.
    ///
    /// # Arguments
    /// - `module` - Documentation module to fetch
    /// - `version` - Artifact version, as resolved by the version resolver
    ///
    /// # Returns
    /// - `Ok(HashSet<DocClass>)` - All types that belong to a package
    /// - `Err(AppError::FetchErr)` - Index could not be retrieved
    /// - `Err(AppError::FormatErr)` - Index is not a JSON array
    pub async fn fetch_classes(
        &self,
        module: DocModule,
        version: &str,
    ) -> Result<HashSet<DocClass>, AppError> {
        let url = self.index_url(module, version, TYPE_INDEX_FILE);
        let body = fetch_text(&self.http_client, &url, "*/*").await?;

        Ok(parse_classes(&body, &self.link_base(module), &url)?)
    }

    /// Fetches every member of a module version.
    ///
    /// # Arguments
    /// - `module` - Documentation module to fetch
    /// - `version` - Artifact version, as resolved by the version resolver
    ///
    /// # Returns
    /// - `Ok(HashSet<DocMethod>)` - All members listed in the index
    /// - `Err(AppError::FetchErr)` - Index could not be retrieved
    /// - `Err(AppError::FormatErr)` - Index is not a JSON array or an entry is malformed
    pub async fn fetch_methods(
        &self,
        module: DocModule,
        version: &str,
    ) -> Result<HashSet<DocMethod>, AppError> {
        let url = self.index_url(module, version, MEMBER_INDEX_FILE);
        let body = fetch_text(&self.http_client, &url, "*/*").await?;

        Ok(parse_methods(&body, &self.link_base(module), &url)?)
    }

    fn index_url(&self, module: DocModule, version: &str, file: &str) -> String {
        format!(
            "{}/javacord-{}/{}/{}",
            self.static_url, module, version, file
        )
    }

    fn link_base(&self, module: DocModule) -> String {
        format!("{}/javacord-{}/latest/", self.link_url, module)
    }
}

/// Decodes a type index script into classes.
///
/// # Arguments
/// - `body` - Index script or bare JSON array
/// - `base_url` - Link base for the created classes
/// - `resource` - Name of the resource for error messages
pub fn parse_classes(
    body: &str,
    base_url: &str,
    resource: &str,
) -> Result<HashSet<DocClass>, FormatError> {
    let mut classes = HashSet::new();
    for (index, node) in parse_index_array(body, resource)?.into_iter().enumerate() {
        let record: TypeRecord =
            serde_json::from_value(node).map_err(|source| FormatError::InvalidRecord {
                resource: resource.to_string(),
                index,
                source,
            })?;

        if let (Some(name), Some(package_name)) = (record.name, record.package_name) {
            classes.insert(DocClass::new(base_url, name, package_name));
        }
    }

    Ok(classes)
}

/// Decodes a member index script into methods.
///
/// Unlike the type index, a member entry lacking a required field fails the
/// whole index.
///
/// # Arguments
/// - `body` - Index script or bare JSON array
/// - `base_url` - Link base for the created methods
/// - `resource` - Name of the resource for error messages
pub fn parse_methods(
    body: &str,
    base_url: &str,
    resource: &str,
) -> Result<HashSet<DocMethod>, FormatError> {
    let mut methods = HashSet::new();
    for (index, node) in parse_index_array(body, resource)?.into_iter().enumerate() {
        let record: MemberRecord =
            serde_json::from_value(node).map_err(|source| FormatError::InvalidRecord {
                resource: resource.to_string(),
                index,
                source,
            })?;

        methods.insert(DocMethod::new(
            base_url,
            record.name,
            record.class_name,
            record.package_name,
            record.url,
        ));
    }

    Ok(methods)
}

/// Strips the variable assignment of an index script and parses the JSON array.
///
/// Only the first JSON value is read, so trailing statements such as
/// `;updateSearchResults();` emitted by newer generators are ignored.
fn parse_index_array(body: &str, resource: &str) -> Result<Vec<Value>, FormatError> {
    let trimmed = body.trim_start();
    let json = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        trimmed
    } else {
        trimmed
            .split_once('=')
            .map(|(_, value)| value.trim_start())
            .unwrap_or(trimmed)
    };

    let root = serde_json::Deserializer::from_str(json)
        .into_iter::<Value>()
        .next()
        .transpose()
        .map_err(|source| FormatError::InvalidJson {
            resource: resource.to_string(),
            source,
        })?;

    match root {
        Some(Value::Array(nodes)) => Ok(nodes),
        _ => Err(FormatError::NotAnArray {
            resource: resource.to_string(),
        }),
    }
}
