//! Actions: named, deterministic state transformations.
//!
//! An [`Action`] pairs an [`EventKind`] (its label and event-type tag) with a
//! transformation `S -> S`. Everything a transformation needs is captured when
//! the action is built, so applying it again replays the same change.
//! Builders exist per interaction type; see [`build_select_toggle_action`],
//! [`build_edge_toggle_action`], [`build_search_action`] and
//! [`build_clear_selection_action`].

mod edge;
mod search;
mod select;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

pub use edge::build_edge_toggle_action;
pub use search::build_search_action;
pub use select::{build_clear_selection_action, build_select_toggle_action};

/// Label of the root State Node.
pub const ROOT_LABEL: &str = "Initialize Provenance";

/// Event type of an action. Its label doubles as the display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    SelectNode,
    DeselectNode,
    SelectEdge,
    DeselectEdge,
    Search,
    ClearSelection,
    /// Application-defined action.
    Custom(String),
}

impl EventKind {
    pub fn label(&self) -> &str {
        match self {
            EventKind::SelectNode => "Select Node",
            EventKind::DeselectNode => "De-select Node",
            EventKind::SelectEdge => "Select Edge",
            EventKind::DeselectEdge => "De-select Edge",
            EventKind::Search => "Search",
            EventKind::ClearSelection => "Clear Selection",
            EventKind::Custom(label) => label,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transformation run on a private clone of the current state.
pub type Transformation<S> = Box<dyn Fn(S) -> Result<S, ActionError> + Send + Sync>;

/// A named state transformation.
pub struct Action<S> {
    kind: EventKind,
    transform: Transformation<S>,
}

impl<S> Action<S> {
    pub fn new<F>(kind: EventKind, transform: F) -> Self
    where
        F: Fn(S) -> Result<S, ActionError> + Send + Sync + 'static,
    {
        Self {
            kind,
            transform: Box::new(transform),
        }
    }

    /// Application-defined action with a free-form label.
    pub fn custom<F>(label: impl Into<String>, transform: F) -> Self
    where
        F: Fn(S) -> Result<S, ActionError> + Send + Sync + 'static,
    {
        Self::new(EventKind::Custom(label.into()), transform)
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn label(&self) -> &str {
        self.kind.label()
    }

    /// Runs the transformation. The caller owns `state`; the graph passes a clone.
    pub fn apply(&self, state: S) -> Result<S, ActionError> {
        (self.transform)(state)
    }
}

impl<S> fmt::Debug for Action<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("kind", &self.kind).finish()
    }
}
