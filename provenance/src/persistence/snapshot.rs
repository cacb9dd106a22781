//! Snapshot entry: one pushed state plus its event label and time.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One element of a persisted record's `history` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    /// Label of the action that produced the state; empty when the state carries none.
    pub event: String,
    /// Milliseconds since the Unix epoch at push time.
    pub timestamp: u64,
    pub state: Value,
}

impl SnapshotEntry {
    /// Wraps a serialized state, reading its `event` field and stamping the current time.
    pub fn from_state(state: Value) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let event = state
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self {
            event,
            timestamp,
            state,
        }
    }

    /// Record that creates a new document for `sink_id`.
    pub fn initial_record(&self, sink_id: &str) -> Value {
        json!({
            "sinkId": sink_id,
            "initialState": self.state,
            "history": [self],
        })
    }

    /// Record merged into an existing document to append this entry.
    pub fn append_record(&self) -> Value {
        json!({ "history": [self] })
    }
}
