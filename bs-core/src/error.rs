//! Error types for the BookStack client.
//!
//! Every failure a call can produce is folded into `BsError`. The variants
//! follow the order in which a call can fail: local configuration and
//! encoding first, then transport, then the API's own error envelope, and
//! finally decoding of the response body.

use thiserror::Error;

/// Convenience type alias for Results using BsError.
pub type BsResult<T> = Result<T, BsError>;

/// Unified error type for the BookStack client.
#[derive(Error, Debug)]
pub enum BsError {
    // -- Configuration errors --
    /// Failed to load, parse or validate configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Local encoding errors --
    /// File system operation failed (e.g. an upload path could not be read).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A request body or config value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Network errors --
    /// HTTP request failed at the transport level.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- API errors --
    /// The API answered with a failure envelope.
    #[error("api error {code}: {message}")]
    Api {
        /// Numeric code from the envelope.
        code: i64,
        /// Message from the envelope.
        message: String,
    },

    // -- Decode errors --
    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl BsError {
    /// The API error code, if this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            BsError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for BsError {
    fn from(e: toml::de::Error) -> Self {
        BsError::Config(e.to_string())
    }
}
