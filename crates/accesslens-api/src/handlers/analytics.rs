//! Cohort and provider analytics endpoints.

use crate::error::ApiError;
use crate::models::OverviewResponse;
use crate::router::ApiState;
use accesslens_core::Provider;
use accesslens_risk::summarize;
use accesslens_store_client::ProviderDashboard;
use axum::{
    extract::{Path, State},
    Json,
};

/// Handler for `GET /analytics/overview`.
///
/// Summarizes the whole cohort. The snapshot cache is updated through
/// a last-issued-wins ticket so a slow store response can never
/// clobber a newer snapshot.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/analytics/overview",
    tag = "analytics",
    responses(
        (status = 200, description = "Organization-wide risk summary", body = OverviewResponse),
        (status = 502, description = "Store unavailable"),
    ),
))]
pub async fn overview(State(state): State<ApiState>) -> Result<Json<OverviewResponse>, ApiError> {
    let ticket = state.overview.begin();
    let profiles = state.store.list_users().await?;

    let response = OverviewResponse {
        total_users: profiles.len(),
        total_resources: profiles.iter().map(|p| p.total_resources()).sum(),
        summary: summarize(&profiles, &state.policy),
    };
    state.overview.commit(ticket, response.clone());

    Ok(Json(response))
}

/// Handler for `GET /analytics/dashboard/:provider`.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/analytics/dashboard/{provider}",
    tag = "analytics",
    params(("provider" = String, Path, description = "Provider: aws, gcp, azure, or okta")),
    responses(
        (status = 200, description = "Provider-level aggregates", body = ProviderDashboard),
        (status = 400, description = "Unknown provider"),
        (status = 502, description = "Store unavailable"),
    ),
))]
pub async fn provider_dashboard(
    State(state): State<ApiState>,
    Path(provider): Path<String>,
) -> Result<Json<ProviderDashboard>, ApiError> {
    let provider: Provider = provider
        .parse()
        .map_err(|e: accesslens_core::types::ProviderParseError| ApiError::invalid_query(e.to_string()))?;

    let dashboard = state.store.fetch_provider_dashboard(provider).await?;
    Ok(Json(dashboard))
}
