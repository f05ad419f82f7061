//! Deterministic node color assignment.
//!
//! Six fixed access-type categories plus a default for anything
//! outside them; provider palette matches each platform's brand color.

use accesslens_core::{AccessType, Provider};

/// Identity (root) node color.
pub const IDENTITY: &str = "#2563EB";

/// Fallback for unknown access types.
pub const DEFAULT: &str = "#6C757D";

/// Brand color for a provider node and the service nodes under it.
#[must_use]
pub fn provider_color(provider: Provider) -> &'static str {
    match provider {
        Provider::Aws => "#FF9900",
        Provider::Gcp => "#4285F4",
        Provider::Azure => "#0078D4",
        Provider::Okta => "#007DC1",
    }
}

/// Color for a resource node, keyed by its access type.
#[must_use]
pub fn access_color(access_type: AccessType) -> &'static str {
    match access_type {
        AccessType::Read => "#28A745",
        AccessType::Write => "#FFC107",
        AccessType::Admin => "#DC3545",
        AccessType::Owner => "#6F42C1",
        AccessType::User => "#17A2B8",
        AccessType::Execute => "#FD7E14",
        AccessType::Other => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_provider_has_a_distinct_color() {
        let colors: std::collections::BTreeSet<_> =
            Provider::all().iter().map(|p| provider_color(*p)).collect();
        assert_eq!(colors.len(), Provider::all().len());
    }

    #[test]
    fn unknown_access_type_gets_default() {
        assert_eq!(access_color(AccessType::Other), DEFAULT);
        assert_ne!(access_color(AccessType::Admin), DEFAULT);
    }
}
