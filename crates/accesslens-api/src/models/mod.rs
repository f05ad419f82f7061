//! Request and response models for the accesslens API.

pub mod requests;
pub mod responses;

pub use requests::{GraphFilterParams, ImportRequest};
pub use responses::{OverviewResponse, ProviderStatsResponse, ProviderUsage, SearchResponse};
