//! Derived risk value types.

use accesslens_core::RiskLevel;
use serde::{Deserialize, Serialize};

/// One fired risk rule and its contribution to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskFactor {
    /// Stable rule identifier (e.g. "cross_provider_admin").
    pub name: String,
    /// What was found.
    pub description: String,
    /// Why it matters for this user.
    pub justification: String,
    /// Severity of the finding.
    pub severity: RiskLevel,
    /// Non-negative contribution to the risk score.
    pub weight: f64,
}

/// One step along a privilege-escalation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EscalationStep {
    /// Action an attacker takes at this step.
    pub action: String,
    /// Grant or surface the action goes through.
    pub detail: String,
}

/// A directed chain from a held privilege to a higher one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EscalationPath {
    /// Privilege the chain starts from; always one the user holds.
    pub start_privilege: String,
    /// Privilege the chain reaches.
    pub end_privilege: String,
    /// Policy-defined score for this path.
    pub risk_score: f64,
    /// The chain itself, at least one step.
    pub path_steps: Vec<EscalationStep>,
}

/// Full risk picture for one identity.
///
/// A pure function of the user's current record set and the active
/// policy; rebuilt whenever either changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskProfile {
    /// Identity this profile describes.
    pub user_email: String,

    /// Clamped score, 0–100.
    pub risk_score: f64,

    /// Threshold bucketing of the score.
    pub risk_level: RiskLevel,

    /// Reliability of the assessment in [0, 1]. Drops when required
    /// signals (usage timestamps) are missing from the record set.
    pub confidence_score: f64,

    /// Number of records carrying admin access.
    pub admin_access_count: usize,

    /// True iff admin access spans two or more distinct providers.
    pub cross_provider_admin: bool,

    /// Number of detected escalation paths.
    pub privilege_escalation_count: usize,

    /// Distinct resources unused beyond the staleness window.
    pub unused_privileges_count: usize,

    /// Rule names of fired factors, highest severity first.
    pub top_risk_factors: Vec<String>,

    /// All fired factors with their contributions.
    pub risk_factors: Vec<RiskFactor>,

    /// Detected privilege-escalation paths.
    pub privilege_escalation_paths: Vec<EscalationPath>,

    /// Deterministic remediation suggestions derived from the fired
    /// factors. Never empty when the level is high or critical.
    pub recommendations: Vec<String>,
}
