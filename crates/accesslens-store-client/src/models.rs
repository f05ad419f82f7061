//! Boundary models for the access-inventory store contract.

use accesslens_core::{Provider, RiskLevel, UserAccessProfile};
use accesslens_risk::RiskProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One user row in a cohort page: profile identity fields plus the
/// precomputed risk figures the listing view needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRiskSummary {
    /// Unique identity key.
    pub user_email: String,
    /// Display name.
    pub user_name: String,
    /// Whether the identity is a service account.
    #[serde(default)]
    pub is_service_account: bool,
    /// Providers the user has any access in.
    pub providers: Vec<Provider>,
    /// Total number of access grants.
    pub total_resources: usize,
    /// Computed risk score, 0–100.
    pub risk_score: f64,
    /// Computed risk level.
    pub risk_level: RiskLevel,
    /// Number of admin-level grants.
    pub admin_access_count: usize,
    /// Whether admin access spans two or more providers.
    pub cross_provider_admin: bool,
    /// Number of detected escalation paths.
    pub privilege_escalation_count: usize,
    /// Leading risk factor names, highest severity first.
    pub top_risk_factors: Vec<String>,
}

impl UserRiskSummary {
    /// Assemble a summary row from a profile and its computed risk.
    /// Used when the store does not supply precomputed figures and
    /// they are derived locally instead.
    #[must_use]
    pub fn from_analysis(profile: &UserAccessProfile, risk: &RiskProfile) -> Self {
        Self {
            user_email: profile.user_email.clone(),
            user_name: profile.user_name.clone(),
            is_service_account: profile.is_service_account,
            providers: profile.providers().into_iter().collect(),
            total_resources: profile.total_resources(),
            risk_score: risk.risk_score,
            risk_level: risk.risk_level,
            admin_access_count: risk.admin_access_count,
            cross_provider_admin: risk.cross_provider_admin,
            privilege_escalation_count: risk.privilege_escalation_count,
            top_risk_factors: risk.top_risk_factors.clone(),
        }
    }
}

/// Page window metadata for a cohort listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Pagination {
    /// Current page, 1-indexed.
    pub page: u32,
    /// Users per page.
    pub page_size: u32,
    /// Total users matching the query.
    pub total_users: usize,
    /// Total pages at this page size.
    pub total_pages: u32,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
}

impl Pagination {
    /// Compute the window for `total_users` matches at `page_size`,
    /// clamping `page` into the valid range.
    #[must_use]
    pub fn compute(page: u32, page_size: u32, total_users: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = (total_users as f64 / f64::from(page_size)).ceil() as u32;
        let page = page.clamp(1, total_pages.max(1));
        Self {
            page,
            page_size,
            total_users,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1 && total_pages > 0,
        }
    }
}

/// One page of the cohort under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CohortPage {
    /// Rows for the current window.
    pub users: Vec<UserRiskSummary>,
    /// Window metadata.
    pub pagination: Pagination,
}

/// Per-service risk figures inside one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceRisk {
    /// Service name.
    pub service: String,
    /// Users with at least one grant in the service.
    pub user_count: usize,
    /// Mean risk score of those users within the provider.
    pub avg_risk: f64,
}

/// One entry in a provider dashboard's top-risk list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TopRiskUser {
    /// Identity key.
    pub user_email: String,
    /// Risk score within the provider.
    pub risk_score: f64,
    /// Risk level within the provider.
    pub risk_level: RiskLevel,
    /// Leading factor names driving the score.
    pub primary_risks: Vec<String>,
}

/// Aggregate dashboard for one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProviderDashboard {
    /// Provider this dashboard describes.
    pub provider: Provider,
    /// Users with any access in the provider.
    pub total_users: usize,
    /// Users with a detected escalation path inside the provider.
    pub privilege_escalation_count: usize,
    /// Users spanning more than one account within the provider.
    pub cross_account_users: usize,
    /// Users per service.
    pub service_breakdown: BTreeMap<String, usize>,
    /// Highest-risk services, descending by average risk.
    pub top_risky_services: Vec<ServiceRisk>,
    /// Highest-risk users, descending by score.
    pub top_risks: Vec<TopRiskUser>,
}

/// Result of a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImportReceipt {
    /// Number of user profiles written.
    pub imported_users: usize,
}
