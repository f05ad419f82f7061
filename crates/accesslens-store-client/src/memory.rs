//! In-memory store implementation.
//!
//! Used by tests and local development. Unlike the remote store, it
//! holds no precomputed risk figures, so it derives them on demand
//! through `accesslens-risk`, the same reconciliation path callers
//! use when a remote collaborator omits derived statistics.

use crate::error::StoreResult;
use crate::models::{
    CohortPage, ImportReceipt, Pagination, ProviderDashboard, ServiceRisk, TopRiskUser,
    UserRiskSummary,
};
use crate::traits::AccessStore;
use accesslens_core::{CohortQuery, Provider, SortField, SortOrder, UserAccessProfile};
use accesslens_risk::{analyze, RiskPolicy};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

/// In-memory [`AccessStore`] keyed by user email.
#[derive(Debug, Default)]
pub struct InMemoryAccessStore {
    users: RwLock<BTreeMap<String, UserAccessProfile>>,
    policy: RiskPolicy,
}

impl InMemoryAccessStore {
    /// Create an empty store with the default risk policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with profiles.
    #[must_use]
    pub fn with_users(users: Vec<UserAccessProfile>) -> Self {
        let store = Self::new();
        {
            let mut map = store.users.write().unwrap_or_else(|e| e.into_inner());
            for user in users {
                map.insert(user.user_email.clone(), user);
            }
        }
        store
    }

    /// Replace the risk policy used for derived statistics.
    #[must_use]
    pub fn with_policy(mut self, policy: RiskPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn snapshot(&self) -> Vec<UserAccessProfile> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    fn compare(a: &UserRiskSummary, b: &UserRiskSummary, query: &CohortQuery) -> Ordering {
        let primary = match query.sort_field {
            SortField::RiskScore => a
                .risk_score
                .partial_cmp(&b.risk_score)
                .unwrap_or(Ordering::Equal),
            SortField::UserEmail => a.user_email.cmp(&b.user_email),
            SortField::TotalResources => a.total_resources.cmp(&b.total_resources),
        };
        let primary = match query.sort_order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        // Deterministic ordering regardless of sort field.
        primary.then_with(|| a.user_email.cmp(&b.user_email))
    }
}

#[async_trait]
impl AccessStore for InMemoryAccessStore {
    async fn fetch_user(&self, email: &str) -> StoreResult<Option<UserAccessProfile>> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(email)
            .cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<UserAccessProfile>> {
        Ok(self.snapshot())
    }

    async fn fetch_cohort(&self, query: &CohortQuery) -> StoreResult<CohortPage> {
        let mut rows: Vec<UserRiskSummary> = self
            .snapshot()
            .iter()
            .filter(|profile| query.matches_search(&profile.user_email))
            .filter(|profile| {
                query
                    .provider
                    .map_or(true, |p| profile.providers().contains(&p))
            })
            .map(|profile| UserRiskSummary::from_analysis(profile, &analyze(profile, &self.policy)))
            .filter(|row| query.risk_level.map_or(true, |level| row.risk_level == level))
            .collect();

        rows.sort_by(|a, b| Self::compare(a, b, query));

        let pagination = Pagination::compute(query.page, query.page_size, rows.len());
        let start = (pagination.page - 1) as usize * pagination.page_size as usize;
        let users = rows
            .into_iter()
            .skip(start)
            .take(pagination.page_size as usize)
            .collect();

        Ok(CohortPage { users, pagination })
    }

    async fn fetch_provider_dashboard(
        &self,
        provider: Provider,
    ) -> StoreResult<ProviderDashboard> {
        let mut total_users = 0;
        let mut privilege_escalation_count = 0;
        let mut cross_account_users = 0;
        let mut service_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        let mut per_service_scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        let mut top_risks: Vec<TopRiskUser> = Vec::new();

        for profile in self.snapshot() {
            // Dashboard figures describe each user's footprint inside
            // this provider only.
            let scoped = UserAccessProfile {
                records: profile
                    .records
                    .iter()
                    .filter(|r| r.provider == provider)
                    .cloned()
                    .collect(),
                ..profile.clone()
            };
            if scoped.records.is_empty() {
                continue;
            }
            total_users += 1;

            let risk = analyze(&scoped, &self.policy);
            if risk.privilege_escalation_count > 0 {
                privilege_escalation_count += 1;
            }

            let accounts: BTreeSet<&str> = scoped
                .records
                .iter()
                .filter_map(|r| r.account_id.as_deref())
                .collect();
            if accounts.len() > 1 {
                cross_account_users += 1;
            }

            let services: BTreeSet<&str> =
                scoped.records.iter().map(|r| r.service.as_str()).collect();
            for service in services {
                *service_breakdown.entry(service.to_string()).or_insert(0) += 1;
                per_service_scores
                    .entry(service.to_string())
                    .or_default()
                    .push(risk.risk_score);
            }

            top_risks.push(TopRiskUser {
                user_email: scoped.user_email.clone(),
                risk_score: risk.risk_score,
                risk_level: risk.risk_level,
                primary_risks: risk.top_risk_factors.iter().take(3).cloned().collect(),
            });
        }

        let mut top_risky_services: Vec<ServiceRisk> = per_service_scores
            .into_iter()
            .map(|(service, scores)| ServiceRisk {
                user_count: scores.len(),
                avg_risk: scores.iter().sum::<f64>() / scores.len() as f64,
                service,
            })
            .collect();
        top_risky_services.sort_by(|a, b| {
            b.avg_risk
                .partial_cmp(&a.avg_risk)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.service.cmp(&b.service))
        });
        top_risky_services.truncate(5);

        top_risks.sort_by(|a, b| {
            b.risk_score
                .partial_cmp(&a.risk_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.user_email.cmp(&b.user_email))
        });
        top_risks.truncate(5);

        Ok(ProviderDashboard {
            provider,
            total_users,
            privilege_escalation_count,
            cross_account_users,
            service_breakdown,
            top_risky_services,
            top_risks,
        })
    }

    async fn import_users(&self, users: Vec<UserAccessProfile>) -> StoreResult<ImportReceipt> {
        let imported_users = users.len();
        let mut map = self.users.write().unwrap_or_else(|e| e.into_inner());
        for user in users {
            map.insert(user.user_email.clone(), user);
        }
        Ok(ImportReceipt { imported_users })
    }
}
