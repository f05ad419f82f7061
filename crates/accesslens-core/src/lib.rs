//! Core types for accesslens.
//!
//! This crate holds the domain model shared by every other accesslens
//! crate: the provider and access-type enums, the canonical
//! [`AccessRecord`]/[`UserAccessProfile`] shapes, the standardized
//! [`CoreError`] type, and the pure cohort query planner.
//!
//! # Modules
//!
//! - [`types`]: enums ([`Provider`], [`AccessType`], [`RiskLevel`])
//! - [`record`]: [`AccessRecord`] and [`UserAccessProfile`]
//! - [`query`]: the [`CohortQuery`] descriptor and planner
//! - [`error`]: standardized error types ([`CoreError`])
//!
//! # Example
//!
//! ```
//! use accesslens_core::{Provider, QueryParams};
//!
//! let provider: Provider = "aws".parse().unwrap();
//! assert_eq!(provider.display_name(), "AWS");
//!
//! // Plan a cohort query from raw UI intent.
//! let query = QueryParams::default().plan();
//! assert_eq!(query.page, 1);
//! ```

pub mod error;
pub mod query;
pub mod record;
pub mod types;

pub use error::{CoreError, Result};
pub use query::{CohortQuery, QueryParams, SortField, SortOrder};
pub use record::{AccessRecord, UserAccessProfile};
pub use types::{AccessType, Provider, RiskLevel};
