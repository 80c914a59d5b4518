//! Error type for catalog fetch operations.

/// Error type for fetch operations.
///
/// This is the only failure channel in the system: synchronous store
/// operations cannot fail, so every error a consumer sees traces back to
/// one of these.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a transport-level failure from the HTTP client.
    pub(crate) fn from_transport(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}
