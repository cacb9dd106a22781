//! # Interaction provenance for network visualizations
//!
//! Records every user-initiated change to visualization state as a traversable,
//! branching history. Undo and redo are deterministic, view code is notified only
//! when fields it watches actually change, and snapshots are forwarded to an
//! external store without blocking interaction.
//!
//! ## Design Principles
//!
//! - **Copy-on-write history**: an [`Action`] never sees a stored snapshot; it
//!   transforms a clone, and the result becomes a new [`StateNode`].
//! - **Inputs captured up front**: action builders compute everything they need
//!   (e.g. a node's neighbors) when built, so replay is deterministic.
//! - **Append-only tree**: nodes are never removed; acting after an undo starts
//!   a branch and redo follows the newest child.
//! - **Best-effort persistence**: pushes are spawned, size-checked, and may fail
//!   or arrive out of order without touching local history.
//!
//! ## Main Modules
//!
//! - [`graph`]: `ProvenanceGraph`, `StateNode`, `ObserverRegistry`, `FieldPath`.
//! - [`action`]: `Action`, `EventKind`, and builders per interaction type.
//! - [`selection`]: network types, `tag_neighbors`, `EdgeIndex`, `search_for`.
//! - [`persistence`]: `PersistenceBridge`, `PersistenceSink`, `InMemorySink`, size estimate.
//! - [`session`]: `Session`, gluing one graph, one network and a sink together.
//!
//! ## Features
//!
//! - `tracing` (default): structured logging via `tracing`; stderr lines otherwise.
//!
//! ## Quick Start
//!
//! ```rust
//! use provenance::{Network, NetworkEdge, NetworkNode, Session, VisState};
//!
//! let network = Network::new(
//!     vec![NetworkNode::new("n1"), NetworkNode::new("n2")],
//!     vec![NetworkEdge::new("e", "n1", "n2")],
//! );
//! let mut session = Session::new(network, VisState::new(), true);
//! session.select_node("n1").unwrap();
//! assert_eq!(session.current_state().selected.get("n1"), Some(&["n2".to_string()][..]));
//! session.undo();
//! assert!(session.current_state().selected.is_empty());
//! ```

pub mod action;
pub mod error;
pub mod graph;
mod logging;
pub mod persistence;
pub mod selection;
pub mod session;
pub mod state;

pub use action::{
    build_clear_selection_action, build_edge_toggle_action, build_search_action,
    build_select_toggle_action, Action, EventKind, ROOT_LABEL,
};
pub use error::{ActionError, ProvenanceError};
pub use graph::{
    FieldPath, NodeId, ObserverError, ObserverFailure, ObserverId, ObserverRegistry,
    ProvenanceGraph, StateNode, Transition,
};
pub use persistence::{
    InMemorySink, JsonSerializer, PersistenceBridge, PersistenceConfig, PersistenceSink,
    PushHandle, PushOutcome, Serializer, SinkError, SizeEstimator, SkipReason, SnapshotEntry,
    DEFAULT_DOCUMENT_CAP, DEFAULT_SIZE_THRESHOLD,
};
pub use selection::{search_for, tag_neighbors, DerivedSelection, EdgeIndex, Network, NetworkEdge, NetworkNode};
pub use session::Session;
pub use state::{Selection, VisState};
