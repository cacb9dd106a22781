//! Neighbor tagging: which nodes and edges surround the current selection.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::network::Network;

/// Neighbor and incident-edge ids derived from a selection.
///
/// Both are sets; a node may appear here and in the selection at the same time
/// (a selected node adjacent to another selected node is also its neighbor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedSelection {
    pub neighbors: BTreeSet<String>,
    pub edges: BTreeSet<String>,
}

impl DerivedSelection {
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty() && self.edges.is_empty()
    }
}

/// Computes neighbors and incident edges of `selected_ids` by scanning every edge.
///
/// Returns empty sets when `include_neighbors` is false (highlighting turned off).
/// Cost is O(|selected| × |edges|); use [`EdgeIndex`] when the same network is
/// tagged repeatedly.
pub fn tag_neighbors<I>(selected_ids: &[I], network: &Network, include_neighbors: bool) -> DerivedSelection
where
    I: AsRef<str>,
{
    let mut out = DerivedSelection::default();
    if !include_neighbors {
        return out;
    }
    for id in selected_ids {
        let id = id.as_ref();
        for edge in &network.edges {
            if let Some(other) = edge.other_endpoint(id) {
                out.neighbors.insert(other.to_string());
                out.edges.insert(edge.id.clone());
            }
        }
    }
    out
}

/// Endpoint → incident edge index over one network.
///
/// Produces the same sets as [`tag_neighbors`] while only visiting edges that
/// touch a selected node.
pub struct EdgeIndex<'a> {
    network: &'a Network,
    incident: HashMap<&'a str, Vec<usize>>,
}

impl<'a> EdgeIndex<'a> {
    pub fn new(network: &'a Network) -> Self {
        let mut incident: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (i, edge) in network.edges.iter().enumerate() {
            incident.entry(edge.source.as_str()).or_default().push(i);
            if edge.target != edge.source {
                incident.entry(edge.target.as_str()).or_default().push(i);
            }
        }
        Self { network, incident }
    }

    /// Number of edges incident to `node_id`.
    pub fn degree(&self, node_id: &str) -> usize {
        self.incident.get(node_id).map_or(0, Vec::len)
    }

    pub fn tag_neighbors<I>(&self, selected_ids: &[I], include_neighbors: bool) -> DerivedSelection
    where
        I: AsRef<str>,
    {
        let mut out = DerivedSelection::default();
        if !include_neighbors {
            return out;
        }
        for id in selected_ids {
            let id = id.as_ref();
            let Some(edges) = self.incident.get(id) else {
                continue;
            };
            for &i in edges {
                let edge = &self.network.edges[i];
                if let Some(other) = edge.other_endpoint(id) {
                    out.neighbors.insert(other.to_string());
                    out.edges.insert(edge.id.clone());
                }
            }
        }
        out
    }
}
