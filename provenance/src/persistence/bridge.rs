//! Persistence bridge: size check, then a non-blocking append to the sink.
//!
//! [`PersistenceBridge::push_snapshot`] does its serialization and size check
//! synchronously and hands the network part to a spawned tokio task. The
//! returned [`PushHandle`] may be dropped (fire-and-forget) or awaited.
//!
//! Writes for one sink id run one after another in push order: each task waits
//! for the previous push to the same id before it reads or writes the record.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::logging;

use super::config::PersistenceConfig;
use super::serializer::{JsonSerializer, Serializer};
use super::sink::{PersistenceSink, SinkError};
use super::size::SizeEstimator;
use super::snapshot::SnapshotEntry;

/// Why a snapshot was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Estimated size exceeded the configured threshold.
    Oversized { estimated: usize, threshold: usize },
    /// The snapshot's event label is in `skip_events`.
    EventFiltered(String),
}

/// Result of one push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// A new record was created for the sink id.
    Created,
    /// The entry was appended to an existing record.
    Appended,
    Skipped(SkipReason),
    /// Serialization or sink failure; local history is unaffected.
    Failed(String),
}

/// Pending or already-decided push.
#[derive(Debug)]
pub enum PushHandle {
    Ready(PushOutcome),
    InFlight(JoinHandle<PushOutcome>),
}

impl PushHandle {
    /// Waits for the push to finish.
    pub async fn outcome(self) -> PushOutcome {
        match self {
            PushHandle::Ready(outcome) => outcome,
            PushHandle::InFlight(handle) => match handle.await {
                Ok(outcome) => outcome,
                Err(e) => PushOutcome::Failed(e.to_string()),
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            PushHandle::Ready(_) => true,
            PushHandle::InFlight(handle) => handle.is_finished(),
        }
    }
}

/// Forwards state snapshots to a [`PersistenceSink`].
pub struct PersistenceBridge<S> {
    sink: Arc<dyn PersistenceSink>,
    config: PersistenceConfig,
    estimator: SizeEstimator,
    serializer: Arc<dyn Serializer<S>>,
    /// Completion signal of the latest push per sink id.
    tails: DashMap<String, oneshot::Receiver<()>>,
}

impl<S> PersistenceBridge<S>
where
    S: serde::Serialize + serde::de::DeserializeOwned + 'static,
{
    /// Creates a bridge using [`JsonSerializer`].
    pub fn new(sink: Arc<dyn PersistenceSink>, config: PersistenceConfig) -> Self {
        Self::with_serializer(sink, config, Arc::new(JsonSerializer))
    }
}

impl<S> PersistenceBridge<S> {
    pub fn with_serializer(
        sink: Arc<dyn PersistenceSink>,
        config: PersistenceConfig,
        serializer: Arc<dyn Serializer<S>>,
    ) -> Self {
        let estimator = SizeEstimator::from_config(&config);
        Self {
            sink,
            config,
            estimator,
            serializer,
            tails: DashMap::new(),
        }
    }

    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    pub fn sink(&self) -> &Arc<dyn PersistenceSink> {
        &self.sink
    }

    /// Estimated stored size of `state`, or `None` if it cannot be serialized.
    pub fn estimate(&self, state: &S) -> Option<usize> {
        self.serializer
            .to_value(state)
            .ok()
            .map(|v| self.estimator.estimate(&v))
    }

    /// Pushes `state` to `sink_id` without blocking the caller.
    ///
    /// Oversized snapshots and filtered events are skipped with a log line; no
    /// error is ever raised. With `is_initial` a new record replaces any stored
    /// one; otherwise the entry is merged in, creating the record if it is missing.
    pub fn push_snapshot(&self, state: &S, is_initial: bool, sink_id: &str) -> PushHandle {
        let value = match self.serializer.to_value(state) {
            Ok(v) => v,
            Err(e) => return Self::failed(sink_id, e),
        };
        let entry = SnapshotEntry::from_state(value);

        if self.config.skips(&entry.event) {
            logging::log_snapshot_filtered(sink_id, &entry.event);
            return PushHandle::Ready(PushOutcome::Skipped(SkipReason::EventFiltered(entry.event)));
        }

        let estimated = self.estimator.estimate(&entry.state);
        if estimated > self.config.size_threshold {
            logging::log_snapshot_oversized(sink_id, estimated, self.config.size_threshold);
            return PushHandle::Ready(PushOutcome::Skipped(SkipReason::Oversized {
                estimated,
                threshold: self.config.size_threshold,
            }));
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => return Self::failed(sink_id, SinkError::Unavailable(e.to_string())),
        };
        let (done, tail) = oneshot::channel();
        let previous = self.tails.insert(sink_id.to_string(), tail);
        let sink = Arc::clone(&self.sink);
        let sink_id = sink_id.to_string();
        PushHandle::InFlight(runtime.spawn(async move {
            if let Some(previous) = previous {
                // Err means the previous task is gone; nothing left to wait for.
                let _ = previous.await;
            }
            let outcome = match write_entry(sink.as_ref(), &sink_id, &entry, is_initial).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    logging::log_push_failed(&sink_id, &e.to_string());
                    PushOutcome::Failed(e.to_string())
                }
            };
            logging::log_push_complete(&sink_id, &outcome);
            let _ = done.send(());
            outcome
        }))
    }

    /// Reads back the most recent state stored for `sink_id`.
    pub async fn load_latest(&self, sink_id: &str) -> Result<Option<S>, SinkError> {
        let Some(record) = self.sink.get(sink_id).await? else {
            return Ok(None);
        };
        let latest = record
            .get("history")
            .and_then(Value::as_array)
            .and_then(|h| h.last())
            .and_then(|e| e.get("state"))
            .or_else(|| record.get("initialState"))
            .cloned();
        match latest {
            Some(state) => self.serializer.from_value(state).map(Some),
            None => Ok(None),
        }
    }

    fn failed(sink_id: &str, error: SinkError) -> PushHandle {
        logging::log_push_failed(sink_id, &error.to_string());
        PushHandle::Ready(PushOutcome::Failed(error.to_string()))
    }
}

async fn write_entry(
    sink: &dyn PersistenceSink,
    sink_id: &str,
    entry: &SnapshotEntry,
    is_initial: bool,
) -> Result<PushOutcome, SinkError> {
    if is_initial {
        sink.write(sink_id, entry.initial_record(sink_id), false)
            .await?;
        return Ok(PushOutcome::Created);
    }
    if sink.get(sink_id).await?.is_some() {
        sink.write(sink_id, entry.append_record(), true).await?;
        Ok(PushOutcome::Appended)
    } else {
        // A record created after the read keeps its history.
        sink.write(sink_id, entry.initial_record(sink_id), true).await?;
        Ok(PushOutcome::Created)
    }
}
