//! Enum definitions shared across the accesslens workspace.
//!
//! All types serialize to `snake_case` strings and parse from strings
//! case-insensitively:
//!
//! ```
//! use accesslens_core::{Provider, RiskLevel};
//!
//! let json = serde_json::to_string(&Provider::Aws).unwrap();
//! assert_eq!(json, "\"aws\"");
//!
//! let level: RiskLevel = "CRITICAL".parse().unwrap();
//! assert_eq!(level, RiskLevel::Critical);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cloud or identity platform that issued an access grant.
///
/// # Parsing
///
/// ```
/// use accesslens_core::Provider;
///
/// assert_eq!("aws".parse::<Provider>().unwrap(), Provider::Aws);
/// assert_eq!("Azure".parse::<Provider>().unwrap(), Provider::Azure);
/// assert!("heroku".parse::<Provider>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Amazon Web Services.
    Aws,
    /// Google Cloud Platform.
    Gcp,
    /// Microsoft Azure.
    Azure,
    /// Okta identity platform (SSO applications).
    Okta,
}

impl Provider {
    /// All supported providers, in canonical order.
    #[must_use]
    pub fn all() -> &'static [Provider] {
        &[Provider::Aws, Provider::Gcp, Provider::Azure, Provider::Okta]
    }

    /// String representation used in wire formats and node ids.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Gcp => "gcp",
            Provider::Azure => "azure",
            Provider::Okta => "okta",
        }
    }

    /// Human-facing display name used as the provider node label.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Gcp => "GCP",
            Provider::Azure => "Azure",
            Provider::Okta => "Okta",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProviderParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "gcp" => Ok(Provider::Gcp),
            "azure" => Ok(Provider::Azure),
            "okta" => Ok(Provider::Okta),
            _ => Err(ProviderParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown provider string.
#[derive(Debug, Clone)]
pub struct ProviderParseError(pub String);

impl fmt::Display for ProviderParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid provider '{}': expected one of: aws, gcp, azure, okta",
            self.0
        )
    }
}

impl std::error::Error for ProviderParseError {}

/// Kind of access granted on a resource.
///
/// Inventory feeds occasionally carry access types outside the six
/// canonical categories; those deserialize to [`AccessType::Other`]
/// and are categorized with defaults instead of being rejected.
///
/// ```
/// use accesslens_core::AccessType;
///
/// let t: AccessType = serde_json::from_str("\"admin\"").unwrap();
/// assert_eq!(t, AccessType::Admin);
///
/// // Unknown values degrade instead of failing.
/// let t: AccessType = serde_json::from_str("\"impersonate\"").unwrap();
/// assert_eq!(t, AccessType::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    /// View-only access.
    Read,
    /// Modify access.
    Write,
    /// Full administrative control.
    Admin,
    /// Resource ownership.
    Owner,
    /// Standard application user access.
    User,
    /// Permission to run or invoke.
    Execute,
    /// Any access type outside the canonical six.
    #[serde(other)]
    Other,
}

impl AccessType {
    /// String representation used in wire formats and edge labels.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Read => "read",
            AccessType::Write => "write",
            AccessType::Admin => "admin",
            AccessType::Owner => "owner",
            AccessType::User => "user",
            AccessType::Execute => "execute",
            AccessType::Other => "other",
        }
    }

    /// Privilege rank for escalation analysis. Higher means more
    /// privileged; `Other` ranks lowest since nothing is known about it.
    #[must_use]
    pub fn privilege_rank(&self) -> u8 {
        match self {
            AccessType::Other => 0,
            AccessType::Read => 1,
            AccessType::User => 2,
            AccessType::Execute => 3,
            AccessType::Write => 4,
            AccessType::Owner => 5,
            AccessType::Admin => 6,
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = AccessTypeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(AccessType::Read),
            "write" => Ok(AccessType::Write),
            "admin" => Ok(AccessType::Admin),
            "owner" => Ok(AccessType::Owner),
            "user" => Ok(AccessType::User),
            "execute" => Ok(AccessType::Execute),
            _ => Err(AccessTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown access-type string.
///
/// Strict parsing is used for filter parameters, where a typo should
/// fall back to "no filter" rather than silently matching nothing.
/// Wire deserialization is lenient instead (see [`AccessType::Other`]).
#[derive(Debug, Clone)]
pub struct AccessTypeParseError(pub String);

impl fmt::Display for AccessTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid access type '{}': expected one of: read, write, admin, owner, user, execute",
            self.0
        )
    }
}

impl std::error::Error for AccessTypeParseError {}

/// Ordinal severity bucket derived from a numeric risk score.
///
/// Implements [`Ord`], so levels can be compared directly:
///
/// ```
/// use accesslens_core::RiskLevel;
///
/// assert!(RiskLevel::Critical > RiskLevel::High);
/// assert!(RiskLevel::Medium >= RiskLevel::Low);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No action needed.
    #[default]
    Low,
    /// Monitor; consider remediation.
    Medium,
    /// Action recommended.
    High,
    /// Immediate action required.
    Critical,
}

impl RiskLevel {
    /// All levels in ascending severity order.
    #[must_use]
    pub fn all() -> &'static [RiskLevel] {
        &[
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ]
    }

    /// String representation used in wire formats.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Whether this level warrants surfacing to an operator.
    #[must_use]
    pub fn requires_attention(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = RiskLevelParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(RiskLevelParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown risk-level string.
#[derive(Debug, Clone)]
pub struct RiskLevelParseError(pub String);

impl fmt::Display for RiskLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid risk level '{}': expected one of: low, medium, high, critical",
            self.0
        )
    }
}

impl std::error::Error for RiskLevelParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trip() {
        for provider in Provider::all() {
            let parsed: Provider = provider.as_str().parse().unwrap();
            assert_eq!(parsed, *provider);
        }
    }

    #[test]
    fn provider_parse_rejects_unknown() {
        let err = "digitalocean".parse::<Provider>().unwrap_err();
        assert!(err.to_string().contains("digitalocean"));
    }

    #[test]
    fn access_type_unknown_deserializes_to_other() {
        let t: AccessType = serde_json::from_str("\"impersonate\"").unwrap();
        assert_eq!(t, AccessType::Other);
    }

    #[test]
    fn access_type_strict_parse_rejects_unknown() {
        assert!("impersonate".parse::<AccessType>().is_err());
        assert_eq!("ADMIN".parse::<AccessType>().unwrap(), AccessType::Admin);
    }

    #[test]
    fn privilege_rank_orders_admin_highest() {
        assert!(AccessType::Admin.privilege_rank() > AccessType::Write.privilege_rank());
        assert!(AccessType::Write.privilege_rank() > AccessType::Read.privilege_rank());
        assert_eq!(AccessType::Other.privilege_rank(), 0);
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Critical > RiskLevel::High);
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert!(RiskLevel::Critical.requires_attention());
        assert!(!RiskLevel::Medium.requires_attention());
    }
}
