//! Store client error types.

use thiserror::Error;

/// Errors surfaced by store adapter implementations.
#[derive(Debug, Error)]
pub enum StoreClientError {
    /// The client could not be constructed from its configuration.
    #[error("invalid store client configuration: {0}")]
    InvalidConfig(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status. Retrying is the
    /// store's concern, not this layer's.
    #[error("store returned {status}: {message}")]
    Upstream {
        /// HTTP status code from the store.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The response body did not match the boundary contract.
    #[error("failed to decode store response: {0}")]
    Decode(String),
}

/// Result alias using [`StoreClientError`].
pub type StoreResult<T> = std::result::Result<T, StoreClientError>;
