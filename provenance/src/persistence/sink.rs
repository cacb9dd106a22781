//! External persistence sink contract.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error returned by a [`PersistenceSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// Backend could not be reached (network, auth, timeout).
    #[error("sink unavailable: {0}")]
    Unavailable(String),
    /// Backend refused the write.
    #[error("write rejected: {0}")]
    Rejected(String),
    /// Record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Document store the bridge pushes snapshot records to.
///
/// `write` with `merge = false` replaces the record. With `merge = true`,
/// top-level arrays in `record` are appended to the stored arrays of the same
/// key and other keys overwrite; a missing record is created.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    async fn get(&self, sink_id: &str) -> Result<Option<Value>, SinkError>;

    async fn write(&self, sink_id: &str, record: Value, merge: bool) -> Result<(), SinkError>;
}
