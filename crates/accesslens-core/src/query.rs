//! Cohort query planning.
//!
//! The planner turns raw, untrusted UI intent ([`QueryParams`]) into a
//! canonical, validated [`CohortQuery`] descriptor. It is pure: no
//! I/O, and identical inputs always produce identical descriptors.
//! Execution of a descriptor against the store adapter is a separate,
//! explicit step.
//!
//! Malformed parameters are normalized here rather than propagated:
//! out-of-range pages are clamped, unknown sort fields fall back to
//! the default, and unparseable filter values become "no filter".

use crate::types::{Provider, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of users per cohort page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum number of users per cohort page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field the cohort is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Sort by computed risk score.
    #[default]
    RiskScore,
    /// Sort by user email, lexicographically.
    UserEmail,
    /// Sort by total number of access grants.
    TotalResources,
}

impl SortField {
    /// String representation used in wire formats.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::RiskScore => "risk_score",
            SortField::UserEmail => "user_email",
            SortField::TotalResources => "total_resources",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "risk_score" => Ok(SortField::RiskScore),
            "user_email" => Ok(SortField::UserEmail),
            "total_resources" => Ok(SortField::TotalResources),
            _ => Err(()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending. The default: highest-risk users surface first.
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Raw query intent as it arrives from the presentation layer.
///
/// Everything is optional and untrusted; [`QueryParams::plan`]
/// normalizes it into a [`CohortQuery`].
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct QueryParams {
    /// Page number (1-indexed).
    #[serde(default)]
    pub page: Option<u32>,

    /// Users per page (1..=100).
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Sort field: `risk_score`, `user_email`, or `total_resources`.
    #[serde(default)]
    pub sort_by: Option<String>,

    /// Sort direction: `asc` or `desc`.
    #[serde(default)]
    pub sort_order: Option<String>,

    /// Case-insensitive substring match against user email.
    #[serde(default)]
    pub search: Option<String>,

    /// Restrict to users with access in one provider.
    #[serde(default)]
    pub provider: Option<String>,

    /// Restrict to users at one computed risk level.
    #[serde(default)]
    pub risk_level: Option<String>,
}

impl QueryParams {
    /// Normalize this raw intent into a canonical descriptor.
    ///
    /// Invalid values never error out of the planner: pages below 1
    /// are clamped to 1, oversized page sizes are clamped to
    /// [`MAX_PAGE_SIZE`], unknown sort fields and directions fall back
    /// to their defaults, and filter values that fail to parse are
    /// dropped (treated as "all").
    #[must_use]
    pub fn plan(&self) -> CohortQuery {
        CohortQuery {
            page: self.page.unwrap_or(1).max(1),
            page_size: self
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            sort_field: self
                .sort_by
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            sort_order: self
                .sort_order
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            provider: self.provider.as_deref().and_then(|s| s.parse().ok()),
            risk_level: self.risk_level.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

/// Canonical, validated cohort query descriptor.
///
/// Produced only by [`QueryParams::plan`] or the `with_*` builders,
/// so every instance is already normalized. Field mutations follow
/// the view-model rules: changing a filter or the search term resets
/// the page window to 1, changing only the page preserves everything
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CohortQuery {
    /// Page number, 1-indexed.
    pub page: u32,
    /// Users per page.
    pub page_size: u32,
    /// Sort field.
    pub sort_field: SortField,
    /// Sort direction. Ties always break by user email ascending.
    pub sort_order: SortOrder,
    /// Case-insensitive substring filter on user email.
    pub search: Option<String>,
    /// Provider filter; `None` means all providers.
    pub provider: Option<Provider>,
    /// Risk-level filter; `None` means all levels.
    pub risk_level: Option<RiskLevel>,
}

impl Default for CohortQuery {
    fn default() -> Self {
        QueryParams::default().plan()
    }
}

impl CohortQuery {
    /// Move to another page. Filters and sort are untouched.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Change the search term. Resets the page window to 1.
    #[must_use]
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self.page = 1;
        self
    }

    /// Change the provider filter. Resets the page window to 1.
    #[must_use]
    pub fn with_provider(mut self, provider: Option<Provider>) -> Self {
        self.provider = provider;
        self.page = 1;
        self
    }

    /// Change the risk-level filter. Resets the page window to 1.
    #[must_use]
    pub fn with_risk_level(mut self, risk_level: Option<RiskLevel>) -> Self {
        self.risk_level = risk_level;
        self.page = 1;
        self
    }

    /// Clamp the page to the last valid page once the total is known.
    /// A total of zero pages clamps to page 1 (an empty first page).
    #[must_use]
    pub fn clamp_page(mut self, total_pages: u32) -> Self {
        self.page = self.page.min(total_pages.max(1));
        self
    }

    /// Whether `email` matches this query's search term.
    ///
    /// The contract is deliberately narrow: a case-insensitive
    /// substring match against the email identifier only, never the
    /// display name or resource names. No search term matches
    /// everything.
    #[must_use]
    pub fn matches_search(&self, email: &str) -> bool {
        match &self.search {
            None => true,
            Some(term) => email.to_lowercase().contains(&term.to_lowercase()),
        }
    }
}
