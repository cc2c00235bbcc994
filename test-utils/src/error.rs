use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to bind or inspect the local test server socket.
    #[error("Test server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
