//! Persistence bridge configuration: size budget and event filter.

/// Default skip threshold, kept below [`DEFAULT_DOCUMENT_CAP`] to leave room for metadata.
pub const DEFAULT_SIZE_THRESHOLD: usize = 750_000;

/// Document size limit of the backing store.
pub const DEFAULT_DOCUMENT_CAP: usize = 1_000_000;

/// Config for a [`PersistenceBridge`](super::PersistenceBridge).
#[derive(Debug, Clone, PartialEq)]
pub struct PersistenceConfig {
    /// Snapshots estimated above this many bytes are not written.
    pub size_threshold: usize,
    /// Hard per-document cap of the backend. The builders keep `size_threshold` at or below it.
    pub document_cap: usize,
    /// Fixed cost added per JSON object.
    pub object_overhead: usize,
    /// Cost of a number or boolean.
    pub scalar_cost: usize,
    /// Event labels whose snapshots are never pushed.
    pub skip_events: Vec<String>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            document_cap: DEFAULT_DOCUMENT_CAP,
            object_overhead: 32,
            scalar_cost: 8,
            skip_events: Vec::new(),
        }
    }
}

impl PersistenceConfig {
    /// Sets the skip threshold, clamped to `document_cap`.
    pub fn with_size_threshold(mut self, size_threshold: usize) -> Self {
        self.size_threshold = size_threshold.min(self.document_cap);
        self
    }

    /// Sets the document cap, lowering `size_threshold` if it no longer fits.
    pub fn with_document_cap(mut self, document_cap: usize) -> Self {
        self.document_cap = document_cap;
        self.size_threshold = self.size_threshold.min(document_cap);
        self
    }

    /// Adds an event label to skip.
    pub fn skip_event(mut self, label: impl Into<String>) -> Self {
        self.skip_events.push(label.into());
        self
    }

    pub fn skips(&self, event: &str) -> bool {
        self.skip_events.iter().any(|e| e == event)
    }
}
