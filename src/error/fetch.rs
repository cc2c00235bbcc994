use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failures while retrieving a remote resource.
///
/// These are transient by nature: the remote host was unreachable, answered with
/// a non-success status, or sent nothing back. Callers holding a cached value
/// fall back to it, everyone else surfaces the message to the user.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request could not be completed.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// The requested URL
        url: String,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The remote host answered with a non-success status code.
    #[error("Request to {url} returned status {status}")]
    Status {
        /// The requested URL
        url: String,
        /// Status code returned by the remote host
        status: StatusCode,
    },

    /// The response carried no body.
    #[error("Request to {url} returned an empty body")]
    EmptyBody {
        /// The requested URL
        url: String,
    },
}
