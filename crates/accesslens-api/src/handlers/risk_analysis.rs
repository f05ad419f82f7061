//! Per-user risk analysis endpoint.

use crate::error::ApiError;
use crate::router::ApiState;
use accesslens_risk::{analyze, RiskProfile};
use axum::{
    extract::{Path, State},
    Json,
};

/// Handler for `GET /risk-analysis/:email`.
///
/// Recomputes the full risk profile from the user's current records.
/// Unlike the search endpoint, an unknown identity here is a typed
/// 404; there is nothing partial to show.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/risk-analysis/{email}",
    tag = "risk",
    params(("email" = String, Path, description = "Identity to analyze")),
    responses(
        (status = 200, description = "Computed risk profile", body = RiskProfile),
        (status = 404, description = "Unknown identity"),
        (status = 502, description = "Store unavailable"),
    ),
))]
pub async fn user_risk_analysis(
    State(state): State<ApiState>,
    Path(email): Path<String>,
) -> Result<Json<RiskProfile>, ApiError> {
    let profile = state
        .store
        .fetch_user(&email)
        .await?
        .ok_or_else(|| ApiError::user_not_found(&email))?;

    Ok(Json(analyze(&profile, &state.policy)))
}
