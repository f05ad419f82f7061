//! Router configuration for the accesslens API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{analytics, import, providers, risk_analysis, search, users};
use crate::models::OverviewResponse;
use crate::services::LatestWins;
use accesslens_risk::RiskPolicy;
use accesslens_store_client::AccessStore;

/// Shared state for all accesslens handlers.
#[derive(Clone)]
pub struct ApiState {
    /// The access-inventory store.
    pub store: Arc<dyn AccessStore>,
    /// Active risk-scoring policy.
    pub policy: Arc<RiskPolicy>,
    /// Last-issued-wins cache for the overview snapshot.
    pub overview: Arc<LatestWins<OverviewResponse>>,
}

impl ApiState {
    /// Create state over a store with the given policy.
    #[must_use]
    pub fn new(store: Arc<dyn AccessStore>, policy: RiskPolicy) -> Self {
        Self {
            store,
            policy: Arc::new(policy),
            overview: Arc::new(LatestWins::new()),
        }
    }
}

/// Build the accesslens API router.
pub fn access_router(state: ApiState) -> Router {
    Router::new()
        .route("/access/search/:email", get(search::search_user_access))
        .route("/users", get(users::list_all_users))
        .route("/users/paginated", get(users::list_cohort))
        .route("/risk-analysis/:email", get(risk_analysis::user_risk_analysis))
        .route("/analytics/overview", get(analytics::overview))
        .route(
            "/analytics/dashboard/:provider",
            get(analytics::provider_dashboard),
        )
        .route("/providers", get(providers::provider_statistics))
        .route("/import", post(import::import_users))
        .with_state(state)
}
