//! Configurable risk-scoring policy.

use accesslens_core::RiskLevel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weights, thresholds, and level boundaries for the risk engine.
///
/// The defaults reflect the relative blast radius of each finding:
/// cross-provider administrative reach dominates, unprotected
/// privileged grants and service-account admin follow, hygiene
/// findings (staleness, breadth) contribute least.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskPolicy {
    /// Weight added when admin access spans two or more providers.
    pub cross_provider_admin_weight: f64,

    /// Weight per admin-level grant.
    pub admin_grant_weight: f64,

    /// Weight per distinct privileged resource without MFA enforcement.
    pub unprotected_privilege_weight: f64,

    /// Weight per distinct resource unused beyond the staleness window.
    pub stale_grant_weight: f64,

    /// Weight per distinct resource whose base severity is high;
    /// critical resources count double.
    pub risky_resource_weight: f64,

    /// Weight added when a service account holds admin access.
    pub service_account_admin_weight: f64,

    /// Weight added when the grant count reaches `broad_scope_threshold`.
    pub broad_scope_weight: f64,

    /// Weight per detected privilege-escalation path.
    pub escalation_path_weight: f64,

    /// Per-path score reported on each escalation path.
    pub escalation_path_score: f64,

    /// Days without observed use after which a grant counts as stale.
    pub staleness_days: i64,

    /// Grant count at which access scope counts as broad.
    pub broad_scope_threshold: usize,

    /// Upper score bound of the Low band.
    pub low_max: f64,

    /// Upper score bound of the Medium band.
    pub medium_max: f64,

    /// Upper score bound of the High band; everything above is Critical.
    pub high_max: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            cross_provider_admin_weight: 25.0,
            admin_grant_weight: 4.0,
            unprotected_privilege_weight: 8.0,
            stale_grant_weight: 3.0,
            risky_resource_weight: 6.0,
            service_account_admin_weight: 15.0,
            broad_scope_weight: 10.0,
            escalation_path_weight: 10.0,
            escalation_path_score: 60.0,
            staleness_days: 90,
            broad_scope_threshold: 25,
            low_max: 25.0,
            medium_max: 50.0,
            high_max: 75.0,
        }
    }
}

impl RiskPolicy {
    /// Validate band boundaries and weight signs.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let weights = [
            self.cross_provider_admin_weight,
            self.admin_grant_weight,
            self.unprotected_privilege_weight,
            self.stale_grant_weight,
            self.risky_resource_weight,
            self.service_account_admin_weight,
            self.broad_scope_weight,
            self.escalation_path_weight,
            self.escalation_path_score,
        ];
        if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(PolicyError::NegativeWeight);
        }
        if !(self.low_max > 0.0 && self.low_max < self.medium_max && self.medium_max < self.high_max)
        {
            return Err(PolicyError::InvalidBands {
                low_max: self.low_max,
                medium_max: self.medium_max,
                high_max: self.high_max,
            });
        }
        if self.staleness_days <= 0 {
            return Err(PolicyError::InvalidStalenessWindow(self.staleness_days));
        }
        Ok(())
    }

    /// Bucket a clamped score into a risk level.
    #[must_use]
    pub fn level_for(&self, score: f64) -> RiskLevel {
        if score <= self.low_max {
            RiskLevel::Low
        } else if score <= self.medium_max {
            RiskLevel::Medium
        } else if score <= self.high_max {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

/// Error returned for an unusable policy.
#[derive(Debug, Clone, Error)]
pub enum PolicyError {
    /// A weight was negative or non-finite.
    #[error("policy weights must be finite and non-negative")]
    NegativeWeight,

    /// Band boundaries were not strictly ascending.
    #[error("risk bands must ascend: low_max={low_max}, medium_max={medium_max}, high_max={high_max}")]
    InvalidBands {
        low_max: f64,
        medium_max: f64,
        high_max: f64,
    },

    /// The staleness window was zero or negative.
    #[error("staleness window must be positive, got {0} days")]
    InvalidStalenessWindow(i64),
}
