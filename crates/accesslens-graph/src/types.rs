//! Graph value types.

use accesslens_core::{AccessType, Provider};
use serde::{Deserialize, Serialize};

/// Layer a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The single root node for the identity under inspection.
    Identity,
    /// One node per distinct provider in the record set.
    Provider,
    /// One node per distinct (provider, service) pair.
    Service,
    /// One node per access record.
    Resource,
}

/// A node in the access graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GraphNode {
    /// Unique node identifier. Opaque to the renderer.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Layer this node belongs to.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Provider this node sits under. `None` only for the identity node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Access type; set only on resource nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessType>,
    /// Render color, assigned deterministically from kind/access type.
    #[serde(skip_deserializing)]
    pub color: &'static str,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GraphEdge {
    /// Unique edge identifier.
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Edge label shown by the renderer.
    pub label: String,
}

/// A layered access graph: a DAG rooted at the identity node.
///
/// Invariants maintained by [`crate::build`] and preserved by
/// [`crate::filter`]:
/// - every edge's source and target reference existing node ids;
/// - the identity node is the unique root;
/// - every resource node has exactly one path to the root, through
///   exactly one service node and one provider node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccessGraph {
    /// Graph nodes. Ids are unique within the graph.
    pub nodes: Vec<GraphNode>,
    /// Graph edges. Ids are unique within the graph.
    pub edges: Vec<GraphEdge>,
}

impl AccessGraph {
    /// Look up a node by its id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The identity root node, when present.
    #[must_use]
    pub fn root(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Identity)
    }

    /// Number of nodes of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// Whether every non-root node is reachable from the identity node.
    ///
    /// Used by tests to check the connectivity invariant; filtering
    /// maintains it by construction.
    #[must_use]
    pub fn is_fully_reachable(&self) -> bool {
        let Some(root) = self.root() else {
            return self.nodes.is_empty();
        };
        let mut reached: std::collections::BTreeSet<&str> = std::collections::BTreeSet::new();
        reached.insert(root.id.as_str());
        let mut frontier = vec![root.id.as_str()];
        while let Some(current) = frontier.pop() {
            for edge in self.edges.iter().filter(|e| e.source == current) {
                if reached.insert(edge.target.as_str()) {
                    frontier.push(edge.target.as_str());
                }
            }
        }
        self.nodes.iter().all(|n| reached.contains(n.id.as_str()))
    }
}
