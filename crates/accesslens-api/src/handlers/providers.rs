//! Provider usage statistics endpoint.

use crate::error::ApiError;
use crate::models::{ProviderStatsResponse, ProviderUsage};
use crate::router::ApiState;
use axum::{extract::State, Json};
use std::collections::BTreeSet;

/// Handler for `GET /providers`.
///
/// Per-provider user and resource counts across the inventory. A user
/// counts once per provider they touch; resources count every grant.
pub async fn provider_statistics(
    State(state): State<ApiState>,
) -> Result<Json<ProviderStatsResponse>, ApiError> {
    let profiles = state.store.list_users().await?;

    let mut stats = ProviderStatsResponse {
        total_users: profiles.len(),
        ..ProviderStatsResponse::default()
    };

    for profile in &profiles {
        let mut seen = BTreeSet::new();
        for record in &profile.records {
            let usage: &mut ProviderUsage = stats.providers.entry(record.provider).or_default();
            usage.resources += 1;
            if seen.insert(record.provider) {
                usage.users += 1;
            }
        }
    }

    Ok(Json(stats))
}
