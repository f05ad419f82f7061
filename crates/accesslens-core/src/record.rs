//! Canonical access record and per-user profile shapes.
//!
//! Inventory feeds are normalized into these shapes at the store
//! adapter boundary, so everything downstream (graph builder, risk
//! engine) sees one canonical form regardless of which provider the
//! data came from.

use crate::types::{AccessType, Provider, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// One grant of access: a (provider, service, resource, access type)
/// tuple plus the risk-relevant attributes of that grant.
///
/// The natural identity of a grant within one user's set is
/// (provider, service, `resource_name`, `access_type`). Duplicates are
/// legitimate (distinct policy attachments) and are
/// kept as-is; aggregates keyed by resource de-duplicate on
/// [`AccessRecord::natural_key`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccessRecord {
    /// Unique record identifier.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Platform that issued the grant.
    pub provider: Provider,

    /// Provider-specific service or category name (e.g. "S3", "IAM",
    /// "Compute Engine", "Salesforce").
    pub service: String,

    /// Name of the resource within the service.
    pub resource_name: String,

    /// Kind of resource (bucket, instance, database, application).
    #[serde(default)]
    pub resource_type: Option<String>,

    /// Kind of access granted.
    pub access_type: AccessType,

    /// Whether the grant is considered privileged by the provider.
    #[serde(default)]
    pub is_privileged: bool,

    /// Whether MFA is enforced for this grant.
    #[serde(default = "default_true")]
    pub mfa_required: bool,

    /// Cloud account or tenant identifier, when known.
    #[serde(default)]
    pub account_id: Option<String>,

    /// Deployment region, when known.
    #[serde(default)]
    pub region: Option<String>,

    /// Free-form description from the inventory feed.
    #[serde(default)]
    pub description: Option<String>,

    /// Last time the grant was observed in use. Absent when the
    /// provider does not report usage data.
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,

    /// Per-resource base severity assigned at ingestion.
    #[serde(default)]
    pub risk_level: RiskLevel,
}

fn default_true() -> bool {
    true
}

impl AccessRecord {
    /// The natural identity of this grant within one user's record
    /// set. Aggregates keyed by resource de-duplicate on this key.
    #[must_use]
    pub fn natural_key(&self) -> (Provider, &str, &str, AccessType) {
        (
            self.provider,
            self.service.as_str(),
            self.resource_name.as_str(),
            self.access_type,
        )
    }
}

/// The full set of access grants held by one identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserAccessProfile {
    /// Unique key for the identity.
    pub user_email: String,

    /// Display name.
    pub user_name: String,

    /// Whether this identity is a service account rather than a person.
    #[serde(default)]
    pub is_service_account: bool,

    /// Organizational unit, when known.
    #[serde(default)]
    pub department: Option<String>,

    /// Access grants in ingestion order. Ordering is not significant
    /// to any derived computation.
    #[serde(default)]
    pub records: Vec<AccessRecord>,
}

impl UserAccessProfile {
    /// Distinct providers across all records, in canonical order.
    #[must_use]
    pub fn providers(&self) -> BTreeSet<Provider> {
        self.records.iter().map(|r| r.provider).collect()
    }

    /// Total number of access grants (duplicates included).
    #[must_use]
    pub fn total_resources(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(provider: Provider, service: &str, resource: &str, access: AccessType) -> AccessRecord {
        AccessRecord {
            id: Uuid::new_v4(),
            provider,
            service: service.to_string(),
            resource_name: resource.to_string(),
            resource_type: None,
            access_type: access,
            is_privileged: false,
            mfa_required: true,
            account_id: None,
            region: None,
            description: None,
            last_used: None,
            risk_level: RiskLevel::Low,
        }
    }

    #[test]
    fn providers_are_distinct_and_ordered() {
        let profile = UserAccessProfile {
            user_email: "alice@example.com".into(),
            user_name: "Alice".into(),
            is_service_account: false,
            department: None,
            records: vec![
                record(Provider::Gcp, "IAM", "role-x", AccessType::Admin),
                record(Provider::Aws, "S3", "bucket-a", AccessType::Read),
                record(Provider::Aws, "IAM", "policy-y", AccessType::Admin),
            ],
        };
        let providers: Vec<_> = profile.providers().into_iter().collect();
        assert_eq!(providers, vec![Provider::Aws, Provider::Gcp]);
        assert_eq!(profile.total_resources(), 3);
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let json = r#"{
            "provider": "aws",
            "service": "S3",
            "resource_name": "bucket-a",
            "access_type": "read"
        }"#;
        let record: AccessRecord = serde_json::from_str(json).unwrap();
        assert!(record.mfa_required);
        assert!(!record.is_privileged);
        assert_eq!(record.risk_level, RiskLevel::Low);
        assert!(record.last_used.is_none());
    }

    #[test]
    fn natural_key_ignores_record_id() {
        let a = record(Provider::Aws, "S3", "bucket-a", AccessType::Read);
        let b = record(Provider::Aws, "S3", "bucket-a", AccessType::Read);
        assert_ne!(a.id, b.id);
        assert_eq!(a.natural_key(), b.natural_key());
    }
}
