use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};

use super::sink::{PersistenceSink, SinkError};

/// In-memory document store keyed by sink id.
///
/// **Interaction**: Used as `Arc<dyn PersistenceSink>` by the bridge in dev and tests.
///
/// **In-Memory**: All records live in memory and are lost when the sink is dropped.
#[derive(Default)]
pub struct InMemorySink {
    records: DashMap<String, Value>,
    writes: AtomicUsize,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write` calls received, including merges.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Copy of the stored record, if any.
    pub fn record(&self, sink_id: &str) -> Option<Value> {
        self.records.get(sink_id).map(|r| r.value().clone())
    }

    /// Length of the record's `history` array; 0 when absent.
    pub fn history_len(&self, sink_id: &str) -> usize {
        self.records
            .get(sink_id)
            .and_then(|r| r.get("history").and_then(Value::as_array).map(Vec::len))
            .unwrap_or(0)
    }

    /// Merges `update` into `existing`: arrays append, other values overwrite.
    fn merge_into(existing: &mut Map<String, Value>, update: Map<String, Value>) {
        for (key, value) in update {
            match value {
                Value::Array(mut items) => {
                    if let Some(Value::Array(stored)) = existing.get_mut(&key) {
                        stored.append(&mut items);
                    } else {
                        existing.insert(key, Value::Array(items));
                    }
                }
                value => {
                    existing.insert(key, value);
                }
            }
        }
    }
}

#[async_trait]
impl PersistenceSink for InMemorySink {
    async fn get(&self, sink_id: &str) -> Result<Option<Value>, SinkError> {
        Ok(self.record(sink_id))
    }

    async fn write(&self, sink_id: &str, record: Value, merge: bool) -> Result<(), SinkError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if !merge {
            self.records.insert(sink_id.to_string(), record);
            return Ok(());
        }
        let Value::Object(update) = record else {
            return Err(SinkError::Rejected("merge requires an object record".into()));
        };
        let mut entry = self
            .records
            .entry(sink_id.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry.value_mut() {
            Value::Object(existing) => Self::merge_into(existing, update),
            other => *other = Value::Object(update),
        }
        Ok(())
    }
}
