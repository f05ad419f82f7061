//! Cohort-level risk summaries.

use crate::engine::analyze_at;
use crate::policy::RiskPolicy;
use accesslens_core::{Provider, RiskLevel, UserAccessProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate risk picture across a set of user profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CohortSummary {
    /// Users per risk level. Every profile lands in exactly one
    /// bucket, so the counts always sum to the cohort size. All four
    /// levels are present even when zero.
    pub risk_distribution: BTreeMap<RiskLevel, usize>,

    /// Users per provider. A profile counts once toward every
    /// provider it touches, so these counts may sum to more than the
    /// cohort size.
    pub provider_distribution: BTreeMap<Provider, usize>,

    /// Users holding admin access in two or more providers.
    pub cross_provider_admin_count: usize,

    /// Users with at least one detected escalation path.
    pub escalation_risk_count: usize,

    /// Users at high or critical risk.
    pub high_risk_user_count: usize,
}

/// Summarize a cohort, evaluating staleness as of the current instant.
#[must_use]
pub fn summarize(profiles: &[UserAccessProfile], policy: &RiskPolicy) -> CohortSummary {
    summarize_at(profiles, policy, Utc::now())
}

/// Summarize a cohort, evaluating staleness as of `as_of`.
#[must_use]
pub fn summarize_at(
    profiles: &[UserAccessProfile],
    policy: &RiskPolicy,
    as_of: DateTime<Utc>,
) -> CohortSummary {
    let mut risk_distribution: BTreeMap<RiskLevel, usize> =
        RiskLevel::all().iter().map(|l| (*l, 0)).collect();
    let mut provider_distribution: BTreeMap<Provider, usize> = BTreeMap::new();
    let mut cross_provider_admin_count = 0;
    let mut escalation_risk_count = 0;
    let mut high_risk_user_count = 0;

    for profile in profiles {
        let risk = analyze_at(profile, policy, as_of);

        *risk_distribution.entry(risk.risk_level).or_insert(0) += 1;
        for provider in profile.providers() {
            *provider_distribution.entry(provider).or_insert(0) += 1;
        }
        if risk.cross_provider_admin {
            cross_provider_admin_count += 1;
        }
        if risk.privilege_escalation_count > 0 {
            escalation_risk_count += 1;
        }
        if risk.risk_level.requires_attention() {
            high_risk_user_count += 1;
        }
    }

    CohortSummary {
        risk_distribution,
        provider_distribution,
        cross_provider_admin_count,
        escalation_risk_count,
        high_risk_user_count,
    }
}
