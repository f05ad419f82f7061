//! Invariant-preserving graph filtering.

use crate::types::{AccessGraph, GraphNode, NodeKind};
use accesslens_core::{AccessType, Provider};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter predicate over an [`AccessGraph`].
///
/// `None` on either axis is the identity transform for that axis, so
/// `GraphFilter::default()` leaves a graph unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GraphFilter {
    /// Keep only the subtree under this provider.
    pub provider: Option<Provider>,
    /// Keep only resource nodes with this access type. Structural
    /// scaffolding (identity, provider, service nodes) is never pruned
    /// by this axis.
    pub access_type: Option<AccessType>,
}

impl GraphFilter {
    /// Filter restricted to one provider.
    #[must_use]
    pub fn by_provider(provider: Provider) -> Self {
        Self {
            provider: Some(provider),
            ..Self::default()
        }
    }

    /// Filter restricted to one access type.
    #[must_use]
    pub fn by_access_type(access_type: AccessType) -> Self {
        Self {
            access_type: Some(access_type),
            ..Self::default()
        }
    }

    /// Whether this filter changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.provider.is_none() && self.access_type.is_none()
    }

    fn keeps(&self, node: &GraphNode) -> bool {
        if node.kind == NodeKind::Identity {
            return true;
        }
        if let Some(provider) = self.provider {
            if node.provider != Some(provider) {
                return false;
            }
        }
        if let Some(access_type) = self.access_type {
            if node.kind == NodeKind::Resource && node.access_type != Some(access_type) {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` to `graph`, producing a new graph.
///
/// Both axes are evaluated in a single combined pass, which makes the
/// operation idempotent and independent of axis order by construction.
/// Edges survive only when both endpoints survive, so no orphan edges
/// remain; since provider pruning removes whole subtrees and
/// access-type pruning removes only leaves, every surviving node stays
/// reachable from the identity node.
///
/// An empty result (identity node only) is a legitimate output, never
/// an error.
#[must_use]
pub fn filter(graph: &AccessGraph, filter: &GraphFilter) -> AccessGraph {
    if filter.is_noop() {
        return graph.clone();
    }

    let nodes: Vec<GraphNode> = graph
        .nodes
        .iter()
        .filter(|n| filter.keeps(n))
        .cloned()
        .collect();

    let kept_ids: BTreeSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let edges = graph
        .edges
        .iter()
        .filter(|e| kept_ids.contains(e.source.as_str()) && kept_ids.contains(e.target.as_str()))
        .cloned()
        .collect();

    AccessGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use accesslens_core::{AccessRecord, RiskLevel, UserAccessProfile};
    use uuid::Uuid;

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

    fn sample_graph() -> AccessGraph {
        build(&UserAccessProfile {
            user_email: "alice@example.com".into(),
            user_name: "Alice".into(),
            is_service_account: false,
            department: None,
            records: vec![
                record(Provider::Aws, "S3", "bucket-a", AccessType::Read),
                record(Provider::Gcp, "IAM", "role-x", AccessType::Admin),
                record(Provider::Aws, "IAM", "policy-y", AccessType::Admin),
            ],
        })
    }

    #[test]
    fn noop_filter_is_identity() {
        let graph = sample_graph();
        let filtered = filter(&graph, &GraphFilter::default());
        assert_eq!(filtered, graph);
    }

    #[test]
    fn provider_filter_keeps_whole_subtree() {
        let graph = sample_graph();
        let filtered = filter(&graph, &GraphFilter::by_provider(Provider::Aws));

        assert_eq!(filtered.count_of(NodeKind::Identity), 1);
        assert_eq!(filtered.count_of(NodeKind::Provider), 1);
        // Both aws services survive: S3 and IAM.
        assert_eq!(filtered.count_of(NodeKind::Service), 2);
        assert_eq!(filtered.count_of(NodeKind::Resource), 2);
        assert!(filtered.is_fully_reachable());
    }

    #[test]
    fn access_filter_keeps_scaffolding() {
        let graph = sample_graph();
        let filtered = filter(&graph, &GraphFilter::by_access_type(AccessType::Admin));

        // Providers and services survive even where no resource matches.
        assert_eq!(filtered.count_of(NodeKind::Provider), 2);
        assert_eq!(filtered.count_of(NodeKind::Service), 3);
        assert_eq!(filtered.count_of(NodeKind::Resource), 2);
        assert!(filtered.is_fully_reachable());
    }

    #[test]
    fn filter_is_idempotent() {
        let graph = sample_graph();
        let predicate = GraphFilter {
            provider: Some(Provider::Aws),
            access_type: Some(AccessType::Admin),
        };
        let once = filter(&graph, &predicate);
        let twice = filter(&once, &predicate);
        assert_eq!(once, twice);
    }

    #[test]
    fn axis_order_does_not_matter() {
        let graph = sample_graph();
        let combined = filter(
            &graph,
            &GraphFilter {
                provider: Some(Provider::Aws),
                access_type: Some(AccessType::Admin),
            },
        );
        let provider_then_access = filter(
            &filter(&graph, &GraphFilter::by_provider(Provider::Aws)),
            &GraphFilter::by_access_type(AccessType::Admin),
        );
        let access_then_provider = filter(
            &filter(&graph, &GraphFilter::by_access_type(AccessType::Admin)),
            &GraphFilter::by_provider(Provider::Aws),
        );
        assert_eq!(combined, provider_then_access);
        assert_eq!(combined, access_then_provider);
    }

    #[test]
    fn empty_match_yields_valid_graph() {
        let graph = sample_graph();
        let filtered = filter(&graph, &GraphFilter::by_access_type(AccessType::Owner));
        // No owner grants: all resources pruned, scaffolding intact.
        assert_eq!(filtered.count_of(NodeKind::Resource), 0);
        assert!(filtered.count_of(NodeKind::Identity) == 1);
        assert!(filtered.is_fully_reachable());
    }

    #[test]
    fn no_dangling_edges_after_filter() {
        let graph = sample_graph();
        let filtered = filter(&graph, &GraphFilter::by_provider(Provider::Gcp));
        for edge in &filtered.edges {
            assert!(filtered.node(&edge.source).is_some());
            assert!(filtered.node(&edge.target).is_some());
        }
    }
}
