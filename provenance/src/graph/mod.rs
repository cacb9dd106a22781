//! State-Graph: an append-only tree of state snapshots with a movable current pointer.
//!
//! [`ProvenanceGraph`] owns every [`StateNode`] and the [`ObserverRegistry`];
//! the only ways to move the pointer are `apply_action`, `go_back_one_step`,
//! `go_forward_one_step` and `go_to_node`.

mod observer;
mod state_graph;
mod state_node;

pub use observer::{
    FieldPath, ObserverCallback, ObserverError, ObserverFailure, ObserverId, ObserverRegistry,
};
pub use state_graph::{ProvenanceGraph, Transition};
pub use state_node::{NodeId, StateNode};
