use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::{builder::CannedResponse, error::TestError};

/// Routes and request log shared with the fallback handler.
#[derive(Clone)]
struct ServerState {
    routes: Arc<HashMap<String, CannedResponse>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Test context owning a running local HTTP server.
///
/// The server answers every request with the canned response registered for its
/// path. The server task is aborted when the context is dropped.
pub struct TestContext {
    /// Base URL of the server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,

    /// Paths requested so far, in arrival order.
    requests: Arc<Mutex<Vec<String>>>,

    server: JoinHandle<()>,
}

impl TestContext {
    /// Binds a listener on a random local port and spawns the server task.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `routes` - Canned responses keyed by request path
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running server
    /// - `Err(TestError::Io)` - Failed to bind the socket
    pub async fn start(routes: HashMap<String, CannedResponse>) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(respond).with_state(ServerState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        });

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url,
            requests,
            server,
        })
    }

    /// Returns the absolute URL of a path on the test server.
    ///
    /// # Arguments
    /// - `path` - Absolute request path, e.g. `/api/wiki.json`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Returns the paths requested so far, in arrival order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Returns a URL on a local port nothing is listening on.
    ///
    /// Binds a socket to obtain a free port, then releases it, so requests to the
    /// returned URL fail with a connection error.
    ///
    /// # Returns
    /// - `Ok(String)` - URL guaranteed to be unreachable at the time of the call
    /// - `Err(TestError::Io)` - Failed to bind the temporary socket
    pub async fn unreachable_url(path: &str) -> Result<String, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        Ok(format!("http://{}{}", addr, path))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Answers a request with the canned response of its path, or 404.
async fn respond(State(server): State<ServerState>, uri: Uri) -> impl IntoResponse {
    let path = uri.path().to_string();

    if let Ok(mut log) = server.requests.lock() {
        log.push(path.clone());
    }

    match server.routes.get(&path) {
        Some(response) => (
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, response.content_type.clone())],
            response.body.clone(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string())],
            "Not Found".to_string(),
        ),
    }
}
