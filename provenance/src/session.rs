//! Interaction session: turns UI events into actions on one provenance graph.
//!
//! A [`Session`] owns the [`ProvenanceGraph`] for a visualization, the network it
//! shows, and an optional persistence target. Each committed move pushes the new
//! current state in the background; the push never blocks or rolls back history.

use serde_json::Value;

use crate::action::{
    build_clear_selection_action, build_edge_toggle_action, build_search_action,
    build_select_toggle_action, Action,
};
use crate::error::ProvenanceError;
use crate::graph::{FieldPath, NodeId, ObserverError, ObserverId, ProvenanceGraph, Transition};
use crate::persistence::{PersistenceBridge, PushHandle, PushOutcome};
use crate::selection::{search_for, DerivedSelection, EdgeIndex, Network};
use crate::state::VisState;

struct PersistenceTarget {
    bridge: PersistenceBridge<VisState>,
    sink_id: String,
    pending: Vec<PushHandle>,
}

/// One user's interaction history over one network.
pub struct Session {
    provenance: ProvenanceGraph<VisState>,
    network: Network,
    include_neighbors: bool,
    persistence: Option<PersistenceTarget>,
}

impl Session {
    /// Starts a session at `initial_state`.
    ///
    /// Selected ids missing from `network` are dropped from the initial state.
    pub fn new(network: Network, mut initial_state: VisState, include_neighbors: bool) -> Self {
        let stale: Vec<String> = initial_state
            .selected
            .keys()
            .filter(|id| !network.contains_node(id))
            .map(str::to_string)
            .collect();
        for id in &stale {
            initial_state.selected.remove(id);
        }
        Self {
            provenance: ProvenanceGraph::new(initial_state),
            network,
            include_neighbors,
            persistence: None,
        }
    }

    /// Attaches a persistence bridge and pushes the root state as the initial snapshot.
    pub fn with_persistence(mut self, bridge: PersistenceBridge<VisState>, sink_id: impl Into<String>) -> Self {
        let sink_id = sink_id.into();
        let first = bridge.push_snapshot(self.provenance.current_state(), true, &sink_id);
        self.persistence = Some(PersistenceTarget {
            bridge,
            sink_id,
            pending: vec![first],
        });
        self
    }

    pub fn provenance(&self) -> &ProvenanceGraph<VisState> {
        &self.provenance
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn current_state(&self) -> &VisState {
        self.provenance.current_state()
    }

    pub fn include_neighbors(&self) -> bool {
        self.include_neighbors
    }

    /// Turns neighbor highlighting on or off. Not a state change; nothing is recorded.
    pub fn set_include_neighbors(&mut self, include: bool) {
        self.include_neighbors = include;
    }

    /// Neighbors and incident edges of the current selection, for highlighting.
    pub fn derived_selection(&self) -> DerivedSelection {
        let selected = self.current_state().selected_ids();
        EdgeIndex::new(&self.network).tag_neighbors(&selected, self.include_neighbors)
    }

    /// Registers a renderer-style observer on the session's provenance graph.
    pub fn observe<P, F>(&mut self, paths: P, callback: F) -> ObserverId
    where
        P: IntoIterator,
        P::Item: Into<FieldPath>,
        F: FnMut(&VisState) -> Result<(), ObserverError> + Send + 'static,
    {
        self.provenance.add_observer(paths, callback)
    }

    /// Click on a node: select it, or de-select it when already selected.
    pub fn select_node(&mut self, node_id: &str) -> Result<Transition, ProvenanceError> {
        let node = self
            .network
            .node(node_id)
            .ok_or_else(|| ProvenanceError::UnknownNetworkNode(node_id.to_string()))?;
        let action = build_select_toggle_action(node, self.current_state(), &self.network);
        self.commit(&action)
    }

    /// Click on an edge: toggle it in `userSelectedEdges`.
    pub fn toggle_edge(&mut self, edge_id: &str) -> Result<Transition, ProvenanceError> {
        if self.network.edge(edge_id).is_none() {
            return Err(ProvenanceError::UnknownNetworkEdge(edge_id.to_string()));
        }
        let action = build_edge_toggle_action(edge_id, self.current_state());
        self.commit(&action)
    }

    /// Search box submit. `Ok(None)` when no node matches; nothing is recorded then.
    pub fn search(&mut self, term: &str) -> Result<Option<Transition>, ProvenanceError> {
        let Some(index) = search_for(&self.network, term) else {
            return Ok(None);
        };
        let node = &self.network.nodes[index];
        let action = build_search_action(node, self.current_state(), &self.network);
        self.commit(&action).map(Some)
    }

    pub fn clear_selection(&mut self) -> Result<Transition, ProvenanceError> {
        self.commit(&build_clear_selection_action())
    }

    /// Applies an application-defined action.
    pub fn apply(&mut self, action: &Action<VisState>) -> Result<Transition, ProvenanceError> {
        self.commit(action)
    }

    pub fn undo(&mut self) -> Option<Transition> {
        let t = self.provenance.go_back_one_step()?;
        self.push_current();
        Some(t)
    }

    pub fn redo(&mut self) -> Option<Transition> {
        let t = self.provenance.go_forward_one_step()?;
        self.push_current();
        Some(t)
    }

    pub fn go_to(&mut self, id: NodeId) -> Result<Option<Transition>, ProvenanceError> {
        let t = self.provenance.go_to_node(id)?;
        if t.is_some() {
            self.push_current();
        }
        Ok(t)
    }

    /// Labels from the root to the current node.
    pub fn history_labels(&self) -> Vec<String> {
        self.provenance
            .path_to_current()
            .into_iter()
            .filter_map(|id| self.provenance.node(id))
            .map(|n| n.label().to_string())
            .collect()
    }

    /// Current state and derived selection as one JSON object.
    pub fn render_snapshot(&self) -> Value {
        serde_json::json!({
            "node": self.provenance.current_id(),
            "state": self.current_state(),
            "derived": self.derived_selection(),
        })
    }

    /// Number of pushes issued since the last flush that have not finished yet.
    pub fn pending_pushes(&self) -> usize {
        self.persistence
            .as_ref()
            .map_or(0, |t| t.pending.iter().filter(|h| !h.is_finished()).count())
    }

    /// Waits for every push issued since the last flush and returns their outcomes in push order.
    pub async fn flush(&mut self) -> Vec<PushOutcome> {
        let Some(target) = self.persistence.as_mut() else {
            return Vec::new();
        };
        let pending = std::mem::take(&mut target.pending);
        let mut outcomes = Vec::with_capacity(pending.len());
        for handle in pending {
            outcomes.push(handle.outcome().await);
        }
        outcomes
    }

    fn commit(&mut self, action: &Action<VisState>) -> Result<Transition, ProvenanceError> {
        let t = self.provenance.apply_action(action)?;
        self.push_current();
        Ok(t)
    }

    fn push_current(&mut self) {
        let Some(target) = self.persistence.as_mut() else {
            return;
        };
        let handle = target
            .bridge
            .push_snapshot(self.provenance.current_state(), false, &target.sink_id);
        target.pending.push(handle);
    }
}
