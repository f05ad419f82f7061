//! The store adapter contract.

use crate::error::StoreResult;
use crate::models::{CohortPage, ImportReceipt, ProviderDashboard};
use accesslens_core::{CohortQuery, Provider, UserAccessProfile};
use async_trait::async_trait;

/// Contract every access-inventory store implementation honors.
///
/// The core owns no durable state; everything behind this trait does.
/// Implementations must treat a missing user as `Ok(None)`, an
/// expected outcome, and reserve errors for actual failures.
#[async_trait]
pub trait AccessStore: Send + Sync {
    /// Fetch one user's full profile by email.
    async fn fetch_user(&self, email: &str) -> StoreResult<Option<UserAccessProfile>>;

    /// Fetch every user profile in the inventory.
    async fn list_users(&self) -> StoreResult<Vec<UserAccessProfile>>;

    /// Fetch one cohort page per a canonical query descriptor.
    async fn fetch_cohort(&self, query: &CohortQuery) -> StoreResult<CohortPage>;

    /// Fetch the aggregate dashboard for one provider.
    async fn fetch_provider_dashboard(&self, provider: Provider)
        -> StoreResult<ProviderDashboard>;

    /// Bulk-insert user profiles, returning how many were written.
    async fn import_users(&self, users: Vec<UserAccessProfile>) -> StoreResult<ImportReceipt>;
}
