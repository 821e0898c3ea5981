//! Error types for the client layer.

use thiserror::Error;

/// Client-specific errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport could not complete the request.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    RequestFailed {
        /// HTTP status code of the failed response.
        status: u16,
    },

    /// The response body was not valid UTF-8 text.
    #[error("response body is not valid text")]
    InvalidBody,

    /// The response body could not be decoded as JSON.
    #[error("failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
