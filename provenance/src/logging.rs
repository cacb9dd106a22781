//! Logging utilities for provenance events.
//!
//! Provides structured logging for pointer moves, observer failures, and
//! snapshot pushes. With the `tracing` feature off, lines go to stderr.

use crate::graph::NodeId;

/// Log a committed action.
pub fn log_action_applied(label: &str, from: NodeId, to: NodeId) {
    #[cfg(feature = "tracing")]
    tracing::debug!(label = label, %from, %to, "Action applied");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Action applied: {} ({} -> {})", label, from, to);
}

/// Log a rejected action; the pointer did not move.
pub fn log_action_failed(label: &str, error: &crate::error::ActionError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(label = label, %error, "Action failed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Action failed: {}: {}", label, error);
}

/// Log an undo/redo/jump pointer move.
pub fn log_pointer_moved(op: &str, from: NodeId, to: NodeId) {
    #[cfg(feature = "tracing")]
    tracing::debug!(op = op, %from, %to, "Current pointer moved");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Current pointer moved by {}: {} -> {}", op, from, to);
}

/// Log an undo/redo that had nowhere to go.
pub fn log_noop(op: &str, at: NodeId) {
    #[cfg(feature = "tracing")]
    tracing::debug!(op = op, %at, "No-op move");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] No-op {} at {}", op, at);
}

/// Log an observer callback failure.
pub fn log_observer_failure(observer: usize, error: &dyn std::error::Error) {
    #[cfg(feature = "tracing")]
    tracing::warn!(observer = observer, %error, "Observer callback failed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Observer {} callback failed: {}", observer, error);
}

/// Log a state that could not be converted for field comparison.
pub fn log_state_unreadable(error: &serde_json::Error) {
    #[cfg(feature = "tracing")]
    tracing::warn!(%error, "State not serializable; notifying all observers");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] State not serializable; notifying all observers: {}", error);
}

/// Log a snapshot dropped because it would exceed the document budget.
pub fn log_snapshot_oversized(sink_id: &str, estimated: usize, threshold: usize) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        sink_id = sink_id,
        estimated = estimated,
        threshold = threshold,
        "Snapshot too large; skipping write"
    );

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] Snapshot too large for {} ({} > {} bytes); skipping write",
        sink_id, estimated, threshold
    );
}

/// Log a snapshot dropped because its event type is filtered.
pub fn log_snapshot_filtered(sink_id: &str, event: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(sink_id = sink_id, event = event, "Snapshot event filtered");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Snapshot event {} filtered for {}", event, sink_id);
}

/// Log a failed push.
pub fn log_push_failed(sink_id: &str, error: &str) {
    #[cfg(feature = "tracing")]
    tracing::error!(sink_id = sink_id, error = error, "Snapshot push failed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Snapshot push to {} failed: {}", sink_id, error);
}

/// Log a completed push.
pub fn log_push_complete(sink_id: &str, outcome: &crate::persistence::PushOutcome) {
    #[cfg(feature = "tracing")]
    tracing::debug!(sink_id = sink_id, ?outcome, "Snapshot push complete");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Snapshot push to {} complete: {:?}", sink_id, outcome);
}
