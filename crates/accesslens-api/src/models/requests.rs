//! Request models.

use accesslens_core::UserAccessProfile;
use accesslens_graph::GraphFilter;
use serde::Deserialize;
use validator::Validate;

/// Graph filter parameters on the search endpoint.
///
/// Both axes are optional; `all` (or an unparseable value) means no
/// filtering on that axis. Typos degrade to "all" rather than erroring
/// so a stale UI never breaks the view.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct GraphFilterParams {
    /// Provider to keep: `aws`, `gcp`, `azure`, `okta`, or `all`.
    #[serde(default)]
    pub provider: Option<String>,

    /// Access type to keep: one of the six access types, or `all`.
    #[serde(default)]
    pub access_type: Option<String>,
}

impl GraphFilterParams {
    /// Normalize into a [`GraphFilter`].
    #[must_use]
    pub fn to_filter(&self) -> GraphFilter {
        GraphFilter {
            provider: self.provider.as_deref().and_then(|s| s.parse().ok()),
            access_type: self.access_type.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

/// Bulk import request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImportRequest {
    /// Profiles to insert or replace, keyed by email.
    #[validate(length(min = 1, message = "import must contain at least one user"))]
    pub users: Vec<UserAccessProfile>,
}
