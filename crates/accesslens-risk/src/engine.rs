//! Per-user risk analysis.

use crate::policy::RiskPolicy;
use crate::profile::{EscalationPath, EscalationStep, RiskFactor, RiskProfile};
use accesslens_core::{AccessRecord, AccessType, Provider, RiskLevel, UserAccessProfile};
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Service-name fragments that mark an identity-management surface.
/// Write access to one of these is the lever for privilege escalation.
const IDENTITY_SERVICE_HINTS: &[&str] = &["iam", "identity", "active directory", "access control"];

/// Analyze a profile against the policy, evaluating staleness as of
/// the current instant.
#[must_use]
pub fn analyze(profile: &UserAccessProfile, policy: &RiskPolicy) -> RiskProfile {
    analyze_at(profile, policy, Utc::now())
}

/// Analyze a profile against the policy, evaluating staleness as of
/// `as_of`.
///
/// Pure and deterministic: the same profile, policy, and instant
/// always produce the same [`RiskProfile`]. Missing signals never
/// error; they reduce `confidence_score` instead.
#[must_use]
pub fn analyze_at(
    profile: &UserAccessProfile,
    policy: &RiskPolicy,
    as_of: DateTime<Utc>,
) -> RiskProfile {
    let records = &profile.records;

    let admin_records: Vec<&AccessRecord> = records
        .iter()
        .filter(|r| r.access_type == AccessType::Admin)
        .collect();
    let admin_access_count = admin_records.len();

    let admin_providers: BTreeSet<Provider> = admin_records.iter().map(|r| r.provider).collect();
    let cross_provider_admin = admin_providers.len() >= 2;

    let unprotected = distinct_resources(records, |r| r.is_privileged && !r.mfa_required);

    let staleness_cutoff = as_of - Duration::days(policy.staleness_days);
    let stale = distinct_resources(records, |r| {
        r.last_used.is_some_and(|used| used < staleness_cutoff)
    });

    // Critical base severity counts double toward the risky-resource rule.
    let risky_units = distinct_resources(records, |r| r.risk_level >= RiskLevel::High)
        .iter()
        .map(|key| {
            let critical = records
                .iter()
                .any(|r| r.natural_key() == *key && r.risk_level == RiskLevel::Critical);
            if critical {
                2
            } else {
                1
            }
        })
        .sum::<usize>();

    let escalation_paths = detect_escalation_paths(profile, policy);

    let mut factors = Vec::new();

    if cross_provider_admin {
        factors.push(RiskFactor {
            name: "cross_provider_admin".to_string(),
            description: format!(
                "admin access in {} providers",
                admin_providers.len()
            ),
            justification: "administrative reach across providers multiplies the blast radius of a single compromised credential".to_string(),
            severity: RiskLevel::Critical,
            weight: policy.cross_provider_admin_weight,
        });
    }

    if admin_access_count > 0 {
        factors.push(RiskFactor {
            name: "admin_concentration".to_string(),
            description: format!("{admin_access_count} admin-level grants"),
            justification: "each admin grant is full control over its resource".to_string(),
            severity: if admin_access_count >= 3 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
            weight: policy.admin_grant_weight * admin_access_count as f64,
        });
    }

    if !unprotected.is_empty() {
        factors.push(RiskFactor {
            name: "privileged_without_mfa".to_string(),
            description: format!(
                "{} privileged resources without MFA enforcement",
                unprotected.len()
            ),
            justification: "privileged access protected by a single factor is the most common takeover vector".to_string(),
            severity: RiskLevel::High,
            weight: policy.unprotected_privilege_weight * unprotected.len() as f64,
        });
    }

    if !stale.is_empty() {
        factors.push(RiskFactor {
            name: "stale_grants".to_string(),
            description: format!(
                "{} resources unused for over {} days",
                stale.len(),
                policy.staleness_days
            ),
            justification: "grants nobody uses are grants nobody is watching".to_string(),
            severity: RiskLevel::Medium,
            weight: policy.stale_grant_weight * stale.len() as f64,
        });
    }

    if risky_units > 0 {
        factors.push(RiskFactor {
            name: "high_severity_resources".to_string(),
            description: "access to resources rated high or critical at ingestion".to_string(),
            justification: "the underlying resources carry elevated base severity".to_string(),
            severity: RiskLevel::High,
            weight: policy.risky_resource_weight * risky_units as f64,
        });
    }

    if profile.is_service_account && admin_access_count > 0 {
        factors.push(RiskFactor {
            name: "service_account_admin".to_string(),
            description: "service account holding admin access".to_string(),
            justification: "non-human identities with admin rights rarely rotate credentials and evade user-centric review".to_string(),
            severity: RiskLevel::High,
            weight: policy.service_account_admin_weight,
        });
    }

    if records.len() >= policy.broad_scope_threshold {
        factors.push(RiskFactor {
            name: "broad_scope".to_string(),
            description: format!("{} access grants across the estate", records.len()),
            justification: "wide scope increases the damage of any single compromise".to_string(),
            severity: RiskLevel::Medium,
            weight: policy.broad_scope_weight,
        });
    }

    if !escalation_paths.is_empty() {
        factors.push(RiskFactor {
            name: "privilege_escalation".to_string(),
            description: format!(
                "{} privilege-escalation paths via identity services",
                escalation_paths.len()
            ),
            justification: "write access to identity management converts any held privilege into admin".to_string(),
            severity: RiskLevel::High,
            weight: policy.escalation_path_weight * escalation_paths.len() as f64,
        });
    }

    let risk_score = factors
        .iter()
        .map(|f| f.weight)
        .sum::<f64>()
        .clamp(0.0, 100.0);
    let risk_level = policy.level_for(risk_score);

    // Sort factors highest severity first; weight breaks ties so the
    // biggest contributors lead the list.
    factors.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then(b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal))
            .then(a.name.cmp(&b.name))
    });
    let top_risk_factors = factors.iter().map(|f| f.name.clone()).collect();

    let recommendations = recommend(&factors, risk_level, policy);

    RiskProfile {
        user_email: profile.user_email.clone(),
        risk_score,
        risk_level,
        confidence_score: confidence(records),
        admin_access_count,
        cross_provider_admin,
        privilege_escalation_count: escalation_paths.len(),
        unused_privileges_count: stale.len(),
        top_risk_factors,
        risk_factors: factors,
        privilege_escalation_paths: escalation_paths,
        recommendations,
    }
}

/// Assessment confidence: full when every record reports usage data,
/// degrading toward 0.5 as `last_used` coverage disappears (staleness
/// detection becomes unreliable without it). Always within [0, 1].
fn confidence(records: &[AccessRecord]) -> f64 {
    if records.is_empty() {
        return 1.0;
    }
    let missing = records.iter().filter(|r| r.last_used.is_none()).count();
    (1.0 - 0.5 * missing as f64 / records.len() as f64).clamp(0.0, 1.0)
}

/// Distinct natural keys among records matching the predicate.
/// Duplicate grants on the same resource count once.
fn distinct_resources<'a, F>(
    records: &'a [AccessRecord],
    predicate: F,
) -> BTreeSet<(Provider, &'a str, &'a str, AccessType)>
where
    F: Fn(&AccessRecord) -> bool,
{
    records
        .iter()
        .filter(|r| predicate(r))
        .map(AccessRecord::natural_key)
        .collect()
}

fn is_identity_service(service: &str) -> bool {
    let lowered = service.to_lowercase();
    IDENTITY_SERVICE_HINTS
        .iter()
        .any(|hint| lowered.contains(hint))
}

/// Detect escalation paths, one per provider.
///
/// The rule: write-or-better access to an identity-management service
/// of provider P lets the holder rewrite policy and mint admin rights
/// in P. When such a grant coexists with a strictly lower privilege
/// in P, the lowest held privilege escalates to admin through that
/// service.
fn detect_escalation_paths(profile: &UserAccessProfile, policy: &RiskPolicy) -> Vec<EscalationPath> {
    let mut by_provider: BTreeMap<Provider, Vec<&AccessRecord>> = BTreeMap::new();
    for record in &profile.records {
        by_provider.entry(record.provider).or_default().push(record);
    }

    let mut paths = Vec::new();
    for (provider, records) in &by_provider {
        let Some(lever) = records
            .iter()
            .find(|r| {
                is_identity_service(&r.service)
                    && r.access_type.privilege_rank() >= AccessType::Write.privilege_rank()
            })
        else {
            continue;
        };

        let Some(start) = records
            .iter()
            .map(|r| r.access_type)
            .filter(|a| a.privilege_rank() < AccessType::Admin.privilege_rank())
            .min_by_key(AccessType::privilege_rank)
        else {
            continue;
        };

        paths.push(EscalationPath {
            start_privilege: start.as_str().to_string(),
            end_privilege: AccessType::Admin.as_str().to_string(),
            risk_score: policy.escalation_path_score,
            path_steps: vec![
                EscalationStep {
                    action: "modify identity policy".to_string(),
                    detail: format!("{} on {}", lever.access_type, lever.service),
                },
                EscalationStep {
                    action: "grant elevated role".to_string(),
                    detail: format!("self-assignment within {}", provider.display_name()),
                },
            ],
        });
    }
    paths
}

/// Deterministic remediation guidance keyed off fired rules.
fn recommend(factors: &[RiskFactor], level: RiskLevel, policy: &RiskPolicy) -> Vec<String> {
    let mut recommendations = Vec::new();
    for factor in factors {
        let text = match factor.name.as_str() {
            "cross_provider_admin" => {
                "split administrative duties into per-provider accounts".to_string()
            }
            "admin_concentration" => {
                "replace standing admin grants with just-in-time elevation".to_string()
            }
            "privileged_without_mfa" => {
                "enforce MFA on every privileged grant".to_string()
            }
            "stale_grants" => format!(
                "revoke grants unused for more than {} days",
                policy.staleness_days
            ),
            "high_severity_resources" => {
                "review access to high-severity resources with their owners".to_string()
            }
            "service_account_admin" => {
                "scope the service account down and rotate its credentials".to_string()
            }
            "broad_scope" => "audit whether this breadth of access is still required".to_string(),
            "privilege_escalation" => {
                "restrict write access to identity-management services".to_string()
            }
            _ => continue,
        };
        if !recommendations.contains(&text) {
            recommendations.push(text);
        }
    }
    if recommendations.is_empty() && level.requires_attention() {
        recommendations.push("review this user's access grants with the resource owners".to_string());
    }
    recommendations
}
