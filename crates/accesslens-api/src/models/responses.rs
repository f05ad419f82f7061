//! Response models.

use accesslens_core::{Provider, UserAccessProfile};
use accesslens_graph::AccessGraph;
use accesslens_risk::CohortSummary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a user access search: the profile (when found) plus the
/// filtered graph for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SearchResponse {
    /// The user's profile, absent when the identity is unknown.
    pub user: Option<UserAccessProfile>,
    /// Graph for the renderer. Empty (no nodes) when `user` is absent.
    pub graph: AccessGraph,
}

/// Organization-wide analytics snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OverviewResponse {
    /// Users in the inventory.
    pub total_users: usize,
    /// Access grants across all users.
    pub total_resources: usize,
    /// Cohort risk summary.
    #[serde(flatten)]
    pub summary: CohortSummary,
}

/// Per-provider usage figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProviderUsage {
    /// Users with at least one grant in the provider.
    pub users: usize,
    /// Total grants in the provider.
    pub resources: usize,
}

/// Usage statistics across all providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProviderStatsResponse {
    /// Users in the inventory.
    pub total_users: usize,
    /// Per-provider breakdown. Providers nobody uses are absent.
    pub providers: BTreeMap<Provider, ProviderUsage>,
}
