//! Network data as supplied by the graph data source: nodes and edges with free-form attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of the network. Attributes other than `id` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NetworkNode {
    /// Creates a node with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Returns the node with `label` set; used by search to match display names.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.attributes
            .insert("label".to_string(), Value::String(label.into()));
        self
    }

    /// Display label, when the data source provided one.
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label").and_then(Value::as_str)
    }
}

/// One edge of the network. Direction is kept but ignored by neighbor tagging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NetworkEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            attributes: Map::new(),
        }
    }

    /// The endpoint opposite `node_id`, or `None` when the edge is not incident to it.
    ///
    /// A self-loop yields the node itself.
    pub fn other_endpoint(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// Read-only network: `{nodes, edges}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub nodes: Vec<NetworkNode>,
    #[serde(default)]
    pub edges: Vec<NetworkEdge>,
}

impl Network {
    pub fn new(nodes: Vec<NetworkNode>, edges: Vec<NetworkEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&NetworkEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Direct neighbor ids of `node_id`, in edge order, without duplicates.
    ///
    /// This is the per-node list stored in `selected` when a node is selected.
    pub fn direct_neighbors(&self, node_id: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for edge in &self.edges {
            if let Some(other) = edge.other_endpoint(node_id) {
                if !out.iter().any(|n| n == other) {
                    out.push(other.to_string());
                }
            }
        }
        out
    }
}
