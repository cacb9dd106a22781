//! Provenance graph: apply actions, undo, redo, branch.
//!
//! Every action application clones the current state, transforms the clone and
//! appends the result as a new child of the current node. Nothing is ever
//! removed; undoing and then acting again starts a new branch next to the old one.

use serde::Serialize;

use crate::action::{Action, ROOT_LABEL};
use crate::error::ProvenanceError;
use crate::logging;

use super::observer::{FieldPath, ObserverError, ObserverFailure, ObserverId, ObserverRegistry};
use super::state_node::{NodeId, StateNode};

/// Report of one pointer move.
#[derive(Debug)]
pub struct Transition {
    pub from: NodeId,
    pub to: NodeId,
    /// Observer callbacks that failed during this move's notification pass.
    pub observer_failures: Vec<ObserverFailure>,
}

impl Transition {
    pub fn observers_ok(&self) -> bool {
        self.observer_failures.is_empty()
    }
}

/// History tree of `S` snapshots with one current node.
///
/// Created already initialized: [`ProvenanceGraph::new`] takes the initial state
/// and makes it the root and current node.
pub struct ProvenanceGraph<S> {
    nodes: Vec<StateNode<S>>,
    current: NodeId,
    observers: ObserverRegistry<S>,
}

impl<S> ProvenanceGraph<S>
where
    S: Clone + Serialize,
{
    /// Creates the root node from `initial_state` and points current at it.
    pub fn new(initial_state: S) -> Self {
        Self {
            nodes: vec![StateNode::root(initial_state, ROOT_LABEL)],
            current: NodeId::from_index(0),
            observers: ObserverRegistry::new(),
        }
    }

    /// State of the current node. Mutation goes through [`apply_action`](Self::apply_action).
    pub fn current_state(&self) -> &S {
        &self.current_node().state
    }

    pub fn current_id(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> &StateNode<S> {
        &self.nodes[self.current.index()]
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::from_index(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&StateNode<S>> {
        self.nodes.get(id.index())
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[StateNode<S>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids from the root down to the current node.
    pub fn path_to_current(&self) -> Vec<NodeId> {
        let mut path = vec![self.current];
        let mut at = self.current_node();
        while let Some(parent) = at.parent {
            path.push(parent);
            at = &self.nodes[parent.index()];
        }
        path.reverse();
        path
    }

    /// Registers an observer on `paths`; see [`ObserverRegistry::add`].
    pub fn add_observer<P, F>(&mut self, paths: P, callback: F) -> ObserverId
    where
        P: IntoIterator,
        P::Item: Into<FieldPath>,
        F: FnMut(&S) -> Result<(), ObserverError> + Send + 'static,
    {
        self.observers.add(paths, callback)
    }

    /// Applies `action` to a clone of the current state and makes the result current.
    ///
    /// On a transformation error nothing is created and the pointer stays put.
    pub fn apply_action(&mut self, action: &Action<S>) -> Result<Transition, ProvenanceError> {
        let from = self.current;
        let candidate = self.current_state().clone();
        let next_state = match action.apply(candidate) {
            Ok(s) => s,
            Err(source) => {
                logging::log_action_failed(action.label(), &source);
                return Err(ProvenanceError::ActionFailed {
                    label: action.label().to_string(),
                    source,
                });
            }
        };

        let id = NodeId::from_index(self.nodes.len());
        self.nodes
            .push(StateNode::child(id, from, next_state, action.kind()));
        self.nodes[from.index()].children.push(id);
        self.current = id;
        logging::log_action_applied(action.label(), from, id);

        Ok(self.notify(from))
    }

    /// Moves current to its parent. `None` at the root.
    pub fn go_back_one_step(&mut self) -> Option<Transition> {
        match self.current_node().parent {
            Some(parent) => Some(self.move_to("undo", parent)),
            None => {
                logging::log_noop("undo", self.current);
                None
            }
        }
    }

    /// Moves current to its most recently created child. `None` at a leaf.
    pub fn go_forward_one_step(&mut self) -> Option<Transition> {
        match self.current_node().newest_child() {
            Some(child) => Some(self.move_to("redo", child)),
            None => {
                logging::log_noop("redo", self.current);
                None
            }
        }
    }

    /// Moves current to any existing node, e.g. an older branch.
    ///
    /// Returns `Ok(None)` when `id` is already current.
    pub fn go_to_node(&mut self, id: NodeId) -> Result<Option<Transition>, ProvenanceError> {
        if self.node(id).is_none() {
            return Err(ProvenanceError::UnknownNode(id));
        }
        if id == self.current {
            return Ok(None);
        }
        Ok(Some(self.move_to("jump", id)))
    }

    fn move_to(&mut self, op: &str, to: NodeId) -> Transition {
        let from = self.current;
        self.current = to;
        logging::log_pointer_moved(op, from, to);
        self.notify(from)
    }

    fn notify(&mut self, from: NodeId) -> Transition {
        let to = self.current;
        let previous = &self.nodes[from.index()].state;
        let current = &self.nodes[to.index()].state;
        let observer_failures = self.observers.notify(previous, current);
        Transition {
            from,
            to,
            observer_failures,
        }
    }
}
