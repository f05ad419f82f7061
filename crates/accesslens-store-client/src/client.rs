//! HTTP store adapter (reqwest-based).

use crate::error::{StoreClientError, StoreResult};
use crate::models::{CohortPage, ImportReceipt, ProviderDashboard};
use crate::traits::AccessStore;
use accesslens_core::{CohortQuery, Provider, UserAccessProfile};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for a remote access-inventory service.
///
/// Wraps `reqwest::Client` with the store's routes and error mapping.
/// No retry logic lives here; retries, if any, belong to the store
/// side of the boundary.
#[derive(Debug, Clone)]
pub struct HttpAccessStore {
    base_url: String,
    http: Client,
}

impl HttpAccessStore {
    /// Create a new store client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("accesslens-store-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                StoreClientError::InvalidConfig(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> StoreResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "store request failed");
            return Err(StoreClientError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| StoreClientError::Decode(e.to_string()))
    }

    fn query_pairs(query: &CohortQuery) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
            ("sort_by", query.sort_field.to_string()),
            (
                "sort_order",
                match query.sort_order {
                    accesslens_core::SortOrder::Asc => "asc".to_string(),
                    accesslens_core::SortOrder::Desc => "desc".to_string(),
                },
            ),
        ];
        if let Some(search) = &query.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(provider) = query.provider {
            pairs.push(("provider", provider.to_string()));
        }
        if let Some(level) = query.risk_level {
            pairs.push(("risk_level", level.to_string()));
        }
        pairs
    }
}

#[async_trait]
impl AccessStore for HttpAccessStore {
    async fn fetch_user(&self, email: &str) -> StoreResult<Option<UserAccessProfile>> {
        debug!(email, "fetching user profile from store");
        let response = self
            .http
            .get(self.url(&format!("/users/{email}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    async fn list_users(&self) -> StoreResult<Vec<UserAccessProfile>> {
        debug!("listing all user profiles from store");
        let response = self.http.get(self.url("/users")).send().await?;
        Self::decode(response).await
    }

    async fn fetch_cohort(&self, query: &CohortQuery) -> StoreResult<CohortPage> {
        debug!(page = query.page, "fetching cohort page from store");
        let response = self
            .http
            .get(self.url("/users/paginated"))
            .query(&Self::query_pairs(query))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn fetch_provider_dashboard(
        &self,
        provider: Provider,
    ) -> StoreResult<ProviderDashboard> {
        debug!(%provider, "fetching provider dashboard from store");
        let response = self
            .http
            .get(self.url(&format!("/analytics/dashboard/{provider}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn import_users(&self, users: Vec<UserAccessProfile>) -> StoreResult<ImportReceipt> {
        debug!(count = users.len(), "importing user profiles into store");
        let response = self
            .http
            .post(self.url("/import"))
            .json(&users)
            .send()
            .await?;
        Self::decode(response).await
    }
}
