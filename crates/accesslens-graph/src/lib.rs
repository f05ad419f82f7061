//! Access graph construction and filtering.
//!
//! Turns one user's flat list of access grants into a layered
//! identity → provider → service → resource graph, and applies
//! provider/access-type filters to a built graph while preserving its
//! structural invariants.
//!
//! Graphs are pure values: built per query from the current record
//! set, never persisted, never mutated in place. The renderer consumes
//! an [`AccessGraph`] as opaque data; node ids come back from it only
//! as opaque selection keys.
//!
//! # Example
//!
//! ```
//! use accesslens_core::UserAccessProfile;
//! use accesslens_graph::{build, filter, GraphFilter, NodeKind};
//!
//! let profile = UserAccessProfile {
//!     user_email: "alice@example.com".into(),
//!     user_name: "Alice".into(),
//!     is_service_account: false,
//!     department: None,
//!     records: vec![],
//! };
//!
//! // An empty record set is a valid one-node graph, not an error.
//! let graph = build(&profile);
//! assert_eq!(graph.nodes.len(), 1);
//! assert_eq!(graph.nodes[0].kind, NodeKind::Identity);
//!
//! // No-op filters are the identity transform.
//! let same = filter(&graph, &GraphFilter::default());
//! assert_eq!(same.nodes.len(), graph.nodes.len());
//! ```

pub mod builder;
pub mod color;
pub mod filter;
pub mod types;

pub use builder::build;
pub use filter::{filter, GraphFilter};
pub use types::{AccessGraph, GraphEdge, GraphNode, NodeKind};
