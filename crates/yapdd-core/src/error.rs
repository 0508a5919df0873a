use thiserror::Error;

/// Result type alias for PDD operations
pub type Result<T> = std::result::Result<T, PddError>;

/// Errors that can occur when using the PDD API
#[derive(Error, Debug)]
pub enum PddError {
    /// The request never produced a response (I/O, DNS, TLS, timeout)
    #[error("{method} {url}: {source}")]
    Transport {
        /// HTTP method of the failed request
        method: String,
        /// Full request URL
        url: String,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The API answered with a status other than 200
    #[error("unexpected response status: {status}")]
    UnexpectedStatus {
        /// Numeric HTTP status
        code: u16,
        /// Status line text, e.g. `503 Service Unavailable`
        status: String,
    },

    /// Response body was not valid JSON or broke the record contract
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API reported `success: "error"`
    #[error("API error: {code}")]
    Api {
        /// Error code returned by the service (e.g. `no_auth`, `bad_domain`)
        code: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PddError {
    /// Returns the HTTP status code if the API answered with a non-200 status
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if the request failed before a response arrived
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
