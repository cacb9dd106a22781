//! Derived selection: neighbor and incident-edge sets computed from a raw node selection.
//!
//! The network types here are read-only input supplied by the graph data source.
//! [`tag_neighbors`] is the pure function provenance actions call to decide which
//! nodes and edges to highlight; the result is never stored as the canonical
//! selection record (that lives in [`VisState::selected`](crate::state::VisState)).

mod network;
mod search;
mod tag;

pub use network::{Network, NetworkEdge, NetworkNode};
pub use search::search_for;
pub use tag::{tag_neighbors, DerivedSelection, EdgeIndex};
