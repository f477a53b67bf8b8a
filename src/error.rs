//! Errors returned by the API client

use thiserror::Error;

/// A failed API call.
///
/// There are two families of failures: the request never produced a usable response
/// (network failure, unreadable or malformed body), or the server answered with a non-2xx status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent, or its response could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body is not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status code
    #[error("HTTP error! status: {0}")]
    Status(u16),
}

impl ApiError {
    /// The HTTP status code, for failures of the [`ApiError::Status`] kind
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }

    /// Whether this is a transport or parse failure (i.e. not an HTTP status failure)
    pub fn is_transport(&self) -> bool {
        self.status().is_none()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
