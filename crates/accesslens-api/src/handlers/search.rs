//! User access search: profile lookup plus the rendered graph.

use crate::error::ApiError;
use crate::models::{GraphFilterParams, SearchResponse};
use crate::router::ApiState;
use accesslens_graph::{build, filter, AccessGraph};
use axum::{
    extract::{Path, Query, State},
    Json,
};

/// Handler for `GET /access/search/:email`.
///
/// Looks up one identity and returns its profile together with the
/// filtered access graph. An unknown identity is a normal outcome:
/// the response carries `user: null` and an empty graph so the view
/// can render "not found" without treating it as a failure.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/access/search/{email}",
    tag = "access",
    params(
        ("email" = String, Path, description = "Identity to look up"),
        GraphFilterParams,
    ),
    responses(
        (status = 200, description = "Profile and filtered access graph", body = SearchResponse),
        (status = 502, description = "Store unavailable"),
    ),
))]
pub async fn search_user_access(
    State(state): State<ApiState>,
    Path(email): Path<String>,
    Query(params): Query<GraphFilterParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    tracing::info!(email, "searching user access");

    let Some(profile) = state.store.fetch_user(&email).await? else {
        return Ok(Json(SearchResponse {
            user: None,
            graph: AccessGraph::default(),
        }));
    };

    let graph = filter(&build(&profile), &params.to_filter());
    Ok(Json(SearchResponse {
        user: Some(profile),
        graph,
    }))
}
