//! State Node: one immutable snapshot plus its position in the history tree.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::action::EventKind;

/// Identifier of a State Node within one [`ProvenanceGraph`](super::ProvenanceGraph).
///
/// Ids are assigned in creation order starting at 0 for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One snapshot in the history tree.
///
/// The parent link is a plain id into the owning graph; children are listed
/// oldest first and never removed.
#[derive(Debug, Clone)]
pub struct StateNode<S> {
    pub(super) id: NodeId,
    pub(super) state: S,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) label: String,
    pub(super) kind: Option<EventKind>,
    pub(super) created_at: SystemTime,
}

impl<S> StateNode<S> {
    pub(super) fn root(state: S, label: &str) -> Self {
        Self {
            id: NodeId(0),
            state,
            parent: None,
            children: Vec::new(),
            label: label.to_string(),
            kind: None,
            created_at: SystemTime::now(),
        }
    }

    pub(super) fn child(id: NodeId, parent: NodeId, state: S, kind: &EventKind) -> Self {
        Self {
            id,
            state,
            parent: Some(parent),
            children: Vec::new(),
            label: kind.label().to_string(),
            kind: Some(kind.clone()),
            created_at: SystemTime::now(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Read-only view of the snapshot.
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children, oldest first.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Most recently appended child; the one redo follows.
    pub fn newest_child(&self) -> Option<NodeId> {
        self.children.last().copied()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Event kind of the producing action; `None` for the root.
    pub fn kind(&self) -> Option<&EventKind> {
        self.kind.as_ref()
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Creation time as milliseconds since the Unix epoch.
    pub fn created_at_millis(&self) -> u128 {
        self.created_at
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}
