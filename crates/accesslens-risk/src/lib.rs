//! Risk aggregation for accesslens.
//!
//! Derives per-user risk profiles and cohort-level summaries from raw
//! access records. All computation is a pure function of the record
//! set and the active [`RiskPolicy`]: profiles are recomputed on
//! demand, never persisted, never partially updated.
//!
//! # Scoring
//!
//! A fixed set of documented rules is evaluated against the record
//! set; each rule that fires contributes one [`RiskFactor`] with a
//! policy-defined weight. The risk score is the clamped sum of fired
//! weights (0–100), so removing a factor can never increase the
//! score. The score maps to a [`RiskLevel`] through policy thresholds
//! (default bands 0–25 / 26–50 / 51–75 / 76–100).
//!
//! Weights and thresholds are deliberately policy, not constants:
//! they are heuristics that operators tune, so they live in
//! [`RiskPolicy`] rather than in the engine.
//!
//! # Example
//!
//! ```
//! use accesslens_core::UserAccessProfile;
//! use accesslens_risk::{analyze, RiskPolicy};
//!
//! let profile = UserAccessProfile {
//!     user_email: "svc-deploy@example.com".into(),
//!     user_name: "Deploy Bot".into(),
//!     is_service_account: true,
//!     department: None,
//!     records: vec![],
//! };
//!
//! let risk = analyze(&profile, &RiskPolicy::default());
//! assert_eq!(risk.risk_score, 0.0);
//! assert_eq!(risk.confidence_score, 1.0);
//! ```

pub mod cohort;
pub mod engine;
pub mod policy;
pub mod profile;

pub use cohort::{summarize, summarize_at, CohortSummary};
pub use engine::{analyze, analyze_at};
pub use policy::{PolicyError, RiskPolicy};
pub use profile::{EscalationPath, EscalationStep, RiskFactor, RiskProfile};
