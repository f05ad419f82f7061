//! accesslens HTTP API.
//!
//! Serves the access graph, per-user risk analysis, and cohort
//! analytics over the store adapter. Handlers are thin: they plan
//! queries, call the store, run the pure graph/risk transformations,
//! and hand plain data back. Display formatting is the
//! presentation layer's concern.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::{ApiError, ErrorResponse};
pub use router::{access_router, ApiState};
