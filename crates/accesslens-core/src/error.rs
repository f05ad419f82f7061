//! Standardized error types for accesslens.
//!
//! Every failure crossing a component boundary is a structured value,
//! never a panic, so callers can distinguish "no data" from
//! "computation failed".
//!
//! # Example
//!
//! ```
//! use accesslens_core::{CoreError, Result};
//!
//! fn find_profile(email: &str) -> Result<String> {
//!     if email.is_empty() {
//!         return Err(CoreError::NotFound {
//!             resource: "UserAccessProfile".to_string(),
//!             id: None,
//!         });
//!     }
//!     Ok(email.to_string())
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Standardized error type shared across accesslens crates.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoreError {
    /// Requested resource was not found. An expected outcome for
    /// lookups by identifier, not a fault.
    #[error("{resource} not found{}", id.as_ref().map(|i| format!(": {i}")).unwrap_or_default())]
    NotFound {
        /// The type of resource that was not found.
        resource: String,
        /// Identifier that was looked up, when available.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },

    /// Query parameters could not be interpreted. Callers going
    /// through the planner never see this; it exists for boundaries
    /// that accept pre-built descriptors.
    #[error("invalid query: {message}")]
    InvalidQuery {
        /// What was wrong with the query.
        message: String,
    },

    /// Input failed domain validation.
    #[error("validation failed: {message}")]
    Validation {
        /// What was rejected and why.
        message: String,
    },
}

/// Result alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
