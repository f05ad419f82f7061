//! Access-inventory store adapter.
//!
//! The durable inventory of access records lives behind a remote
//! collaborator. This crate owns that boundary: the request/response
//! models, the [`AccessStore`] trait, the reqwest-based
//! [`HttpAccessStore`], and an [`InMemoryAccessStore`] used by tests
//! and local development.
//!
//! Failure policy: upstream failures surface as one typed
//! [`StoreClientError`], never swallowed and never retried here. A
//! missing user is `Ok(None)`, not an error; "no data" and "call
//! failed" stay distinguishable.

pub mod client;
pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

pub use client::HttpAccessStore;
pub use error::{StoreClientError, StoreResult};
pub use memory::InMemoryAccessStore;
pub use models::{
    CohortPage, ImportReceipt, Pagination, ProviderDashboard, ServiceRisk, TopRiskUser,
    UserRiskSummary,
};
pub use traits::AccessStore;
