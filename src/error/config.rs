use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env.example` file for the list of configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holding a URL could not be parsed as one.
    #[error("Environment variable {name} is not a valid URL '{value}': {source}")]
    InvalidUrl {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// Environment variable holds a value outside the accepted set.
    #[error("Environment variable {name} has unsupported value '{value}'")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The rejected value
        value: String,
    },

    /// The shared HTTP client could not be constructed.
    ///
    /// Usually caused by a TLS backend that fails to initialize.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
