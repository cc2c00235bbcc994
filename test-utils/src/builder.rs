use std::collections::HashMap;

use crate::{context::TestContext, error::TestError};

/// A response the test server sends for one path.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Response body.
    pub body: String,
}

/// Builder for creating test contexts backed by a local HTTP server.
///
/// Provides a fluent interface for registering canned responses per request path,
/// then call `build()` to bind the server and obtain the configured test context.
/// Requests for unregistered paths are answered with `404 Not Found`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_route("/latest.json", r#"{"number": "3.8.0 (#42)"}"#)
///     .with_status("/broken.json", 500, "")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Canned responses keyed by request path, query string excluded.
    routes: HashMap<String, CannedResponse>,
}

impl TestBuilder {
    /// Creates a new test builder with no routes configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance answering every request with 404
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a `200 OK` response for a path.
    ///
    /// # Arguments
    /// - `path` - Absolute request path, e.g. `/api/wiki.json`
    /// - `body` - Response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_route(self, path: &str, body: impl Into<String>) -> Self {
        self.with_status(path, 200, body)
    }

    /// Registers a response with an arbitrary status code for a path.
    ///
    /// Registering the same path twice replaces the earlier response.
    ///
    /// # Arguments
    /// - `path` - Absolute request path
    /// - `status` - HTTP status code to answer with
    /// - `body` - Response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            path.to_string(),
            CannedResponse {
                status,
                content_type: "text/plain; charset=utf-8".to_string(),
                body: body.into(),
            },
        );
        self
    }

    /// Registers both search indexes of one JavaDoc module version.
    ///
    /// The files are served below `/static/javacord-{module}/{version}/`, matching
    /// the layout the docs fetcher requests when its static URL is
    /// `TestContext::url("/static")`.
    ///
    /// # Arguments
    /// - `module` - Module name, `api` or `core`
    /// - `version` - Artifact version
    /// - `type_index` - Body of `type-search-index.js`
    /// - `member_index` - Body of `member-search-index.js`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_javadoc_indexes(
        self,
        module: &str,
        version: &str,
        type_index: impl Into<String>,
        member_index: impl Into<String>,
    ) -> Self {
        let base = format!("/static/javacord-{}/{}", module, version);
        self.with_route(&format!("{}/type-search-index.js", base), type_index)
            .with_route(&format!("{}/member-search-index.js", base), member_index)
    }

    /// Binds the server on a random local port and starts serving.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running server ready to accept requests
    /// - `Err(TestError::Io)` - Failed to bind the local socket
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::start(self.routes).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
