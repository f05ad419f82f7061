//! Access graph construction.

use crate::color;
use crate::types::{AccessGraph, GraphEdge, GraphNode, NodeKind};
use accesslens_core::{AccessRecord, Provider, UserAccessProfile};
use std::collections::BTreeMap;

/// Build the layered access graph for one user's profile.
///
/// Produces exactly one identity node, one provider node per distinct
/// provider, one service node per distinct (provider, service) pair,
/// and one resource node per record. Grouping uses ordered maps, so
/// any permutation of the same records yields the same node and edge
/// counts and the same label multiset.
///
/// An empty record set yields a graph containing only the identity
/// node, a legitimate result rather than an error.
#[must_use]
pub fn build(profile: &UserAccessProfile) -> AccessGraph {
    let mut nodes = Vec::with_capacity(profile.records.len() + 8);
    let mut edges = Vec::with_capacity(profile.records.len() + 8);

    let identity_id = format!("identity-{}", profile.user_email);
    nodes.push(GraphNode {
        id: identity_id.clone(),
        label: profile.user_email.clone(),
        kind: NodeKind::Identity,
        provider: None,
        access_type: None,
        color: color::IDENTITY,
    });

    // provider → service → records, ordered on both levels.
    let mut by_provider: BTreeMap<Provider, BTreeMap<&str, Vec<&AccessRecord>>> = BTreeMap::new();
    for record in &profile.records {
        by_provider
            .entry(record.provider)
            .or_default()
            .entry(record.service.as_str())
            .or_default()
            .push(record);
    }

    for (provider, services) in &by_provider {
        let provider_id = format!("provider-{provider}");
        nodes.push(GraphNode {
            id: provider_id.clone(),
            label: provider.display_name().to_string(),
            kind: NodeKind::Provider,
            provider: Some(*provider),
            access_type: None,
            color: color::provider_color(*provider),
        });
        edges.push(GraphEdge {
            id: format!("edge-identity-{provider}"),
            source: identity_id.clone(),
            target: provider_id.clone(),
            label: "has access".to_string(),
        });

        for (service, records) in services {
            let service_slug = slug(service);
            let service_id = format!("service-{provider}-{service_slug}");
            nodes.push(GraphNode {
                id: service_id.clone(),
                label: (*service).to_string(),
                kind: NodeKind::Service,
                provider: Some(*provider),
                access_type: None,
                color: color::provider_color(*provider),
            });
            edges.push(GraphEdge {
                id: format!("edge-{provider}-{service_slug}"),
                source: provider_id.clone(),
                target: service_id.clone(),
                label: "provides".to_string(),
            });

            for record in records {
                let resource_id = format!("resource-{}", record.id);
                nodes.push(GraphNode {
                    id: resource_id.clone(),
                    label: record.resource_name.clone(),
                    kind: NodeKind::Resource,
                    provider: Some(*provider),
                    access_type: Some(record.access_type),
                    color: color::access_color(record.access_type),
                });
                edges.push(GraphEdge {
                    id: format!("edge-{service_slug}-{}", record.id),
                    source: service_id.clone(),
                    target: resource_id.clone(),
                    label: record.access_type.as_str().to_string(),
                });
            }
        }
    }

    AccessGraph { nodes, edges }
}

/// Lowercased, dash-separated form of a service name, for stable ids.
fn slug(service: &str) -> String {
    service
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
