//! User listing endpoints.

use crate::error::ApiError;
use crate::router::ApiState;
use accesslens_core::{QueryParams, UserAccessProfile};
use accesslens_store_client::CohortPage;
use axum::{
    extract::{Query, State},
    Json,
};

/// Handler for `GET /users`.
///
/// Returns every profile in the inventory, records included. Intended
/// for small estates and tooling; interactive views page through
/// [`list_cohort`] instead.
pub async fn list_all_users(
    State(state): State<ApiState>,
) -> Result<Json<Vec<UserAccessProfile>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// Handler for `GET /users/paginated`.
///
/// Plans the raw query parameters into a canonical descriptor and
/// executes it against the store. Planning never rejects: malformed
/// values are normalized (see `accesslens_core::query`).
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/users/paginated",
    tag = "users",
    params(QueryParams),
    responses(
        (status = 200, description = "One page of the cohort", body = CohortPage),
        (status = 502, description = "Store unavailable"),
    ),
))]
pub async fn list_cohort(
    State(state): State<ApiState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<CohortPage>, ApiError> {
    let query = params.plan();
    tracing::info!(
        page = query.page,
        page_size = query.page_size,
        sort_field = %query.sort_field,
        search = ?query.search,
        "listing cohort page"
    );
    let page = state.store.fetch_cohort(&query).await?;
    Ok(Json(page))
}
