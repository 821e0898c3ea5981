//! Error types for the search controller.

use panels_client::ClientError;
use thiserror::Error;

/// Search-specific errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A pagination control was activated before any search was submitted.
    #[error("no search has been submitted yet")]
    NoPendingSearch,

    /// The search endpoint answered with a non-success status.
    #[error("search request failed with status {0}")]
    Status(u16),

    /// Client error.
    #[error("client error: {0}")]
    Client(#[from] ClientError),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
