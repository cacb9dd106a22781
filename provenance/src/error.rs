//! Error types for provenance operations.
//!
//! [`ProvenanceError`] is returned by state-graph and session operations;
//! [`ActionError`] is what an action's transformation returns when it refuses
//! to produce a new state.

use thiserror::Error;

use crate::graph::NodeId;

/// Failure inside an action's transformation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The transformation rejected the input state.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Provenance operation error.
///
/// When an operation returns this error the current pointer has not moved.
#[derive(Debug, Error)]
pub enum ProvenanceError {
    /// The action's transformation failed; no State Node was created.
    #[error("action '{label}' failed: {source}")]
    ActionFailed { label: String, source: ActionError },

    /// Navigation to a history node id the graph never produced.
    #[error("unknown history node: {0}")]
    UnknownNode(NodeId),

    /// An interaction referred to a node id absent from the network.
    #[error("node not in network: {0}")]
    UnknownNetworkNode(String),

    /// An interaction referred to an edge id absent from the network.
    #[error("edge not in network: {0}")]
    UnknownNetworkEdge(String),
}
