//! # Persistence: best-effort snapshot pushes to an external sink
//!
//! The [`PersistenceBridge`] turns a state snapshot into a JSON entry, estimates
//! its stored size, and either skips it (too large, or a filtered event type) or
//! spawns a write to a [`PersistenceSink`] without waiting for it.
//!
//! ## Record layout
//!
//! The first push for a sink id creates `{"sinkId", "initialState", "history": [entry]}`;
//! later pushes write `{"history": [entry]}` with `merge = true`, which appends.
//! Pushes may land out of order; nothing here retries or rolls back.
//!
//! ## Sinks
//!
//! | Type            | Persistence | Use case    |
//! |-----------------|-------------|-------------|
//! | [`InMemorySink`] | In-memory   | Dev, tests  |
//!
//! Other backends implement [`PersistenceSink`].

mod bridge;
mod config;
mod in_memory_sink;
mod serializer;
mod sink;
mod size;
mod snapshot;

pub use bridge::{PersistenceBridge, PushHandle, PushOutcome, SkipReason};
pub use config::{PersistenceConfig, DEFAULT_DOCUMENT_CAP, DEFAULT_SIZE_THRESHOLD};
pub use in_memory_sink::InMemorySink;
pub use serializer::{JsonSerializer, Serializer};
pub use sink::{PersistenceSink, SinkError};
pub use size::SizeEstimator;
pub use snapshot::SnapshotEntry;
