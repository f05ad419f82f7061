//! Bulk import endpoint.

use crate::error::ApiError;
use crate::models::ImportRequest;
use crate::router::ApiState;
use accesslens_store_client::ImportReceipt;
use axum::{extract::State, Json};
use validator::Validate;

/// Handler for `POST /import`.
///
/// Validates and forwards a bulk insert to the store. The core keeps
/// no durable state of its own; views re-fetch after an import.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/import",
    tag = "import",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Number of users written", body = ImportReceipt),
        (status = 400, description = "Empty or malformed import"),
        (status = 502, description = "Store unavailable"),
    ),
))]
pub async fn import_users(
    State(state): State<ApiState>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportReceipt>, ApiError> {
    request.validate()?;

    tracing::info!(count = request.users.len(), "importing user profiles");
    let receipt = state.store.import_users(request.users).await?;
    Ok(Json(receipt))
}
