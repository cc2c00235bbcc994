use thiserror::Error;

/// Contract violations in a remote document.
///
/// The doc indexes, the wiki feed and the version document are produced by
/// generators we do not control. A shape mismatch means one of them changed, so
/// these are logged at a higher severity than [`super::fetch::FetchError`].
#[derive(Error, Debug)]
pub enum FormatError {
    /// The body could not be parsed as JSON at all.
    #[error("Format of {resource} not as expected: invalid JSON: {source}")]
    InvalidJson {
        /// Name of the remote resource
        resource: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The JSON root was expected to be an array.
    #[error("Format of {resource} not as expected: root is not an array")]
    NotAnArray {
        /// Name of the remote resource
        resource: String,
    },

    /// The JSON root was expected to be an object.
    #[error("Format of {resource} not as expected: root is not an object")]
    NotAnObject {
        /// Name of the remote resource
        resource: String,
    },

    /// An array element is missing a required field or has the wrong type.
    #[error("Format of {resource} not as expected: entry {index} is malformed: {source}")]
    InvalidRecord {
        /// Name of the remote resource
        resource: String,
        /// Position of the entry in the array
        index: usize,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The XML document could not be read.
    #[error("Format of {resource} not as expected: invalid XML: {reason}")]
    InvalidXml {
        /// Name of the remote resource
        resource: String,
        /// Reader error description
        reason: String,
    },

    /// The version document does not contain a usable version token.
    #[error("Format of {resource} not as expected: no version found")]
    MissingVersion {
        /// Name of the remote resource
        resource: String,
    },
}
