//! Visualization state: the record every State Node snapshots.
//!
//! Required fields are typed; anything else the application keeps in state
//! (layout toggles, filters) rides along in [`VisState::extra`] and is
//! flattened into the same JSON object, so observers and persistence see one
//! flat record.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::selection::Network;

/// Selected node id → that node's direct neighbor ids, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, Vec<String>)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == node_id)
    }

    pub fn get(&self, node_id: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == node_id)
            .map(|(_, v)| v.as_slice())
    }

    /// Inserts or replaces; a replaced entry keeps its original position.
    pub fn insert(&mut self, node_id: impl Into<String>, neighbors: Vec<String>) {
        let node_id = node_id.into();
        match self.entries.iter_mut().find(|(k, _)| *k == node_id) {
            Some((_, v)) => *v = neighbors,
            None => self.entries.push((node_id, neighbors)),
        }
    }

    pub fn remove(&mut self, node_id: &str) -> Option<Vec<String>> {
        let pos = self.entries.iter().position(|(k, _)| k == node_id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Selected ids in selection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Selection {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        let mut out = Selection::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

impl Serialize for Selection {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct SelectionVisitor;

impl<'de> Visitor<'de> for SelectionVisitor {
    type Value = Selection;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of node id to neighbor id list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Selection, A::Error> {
        let mut out = Selection::new();
        while let Some((k, v)) = access.next_entry::<String, Vec<String>>()? {
            out.insert(k, v);
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SelectionVisitor)
    }
}

/// One snapshot of visualization state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisState {
    #[serde(default)]
    pub selected: Selection,
    #[serde(default)]
    pub user_selected_edges: BTreeSet<String>,
    /// Searched ids, oldest first.
    #[serde(default)]
    pub search: Vec<String>,
    /// Label of the action that produced this state.
    #[serde(default)]
    pub event: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every selected id names a node of `network`.
    pub fn selection_within(&self, network: &Network) -> bool {
        self.selected.keys().all(|id| network.contains_node(id))
    }

    /// Selected ids as owned strings, in selection order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.keys().map(str::to_string).collect()
    }
}
