//! Optional overrides for a replay (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options) and
//! [`run_with_options`](crate::run_with_options).

use std::path::PathBuf;

/// Optional overrides for a run: network file, script, sink, size budget, highlighting.
///
/// All fields are optional; only set fields override the base config (from env).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Network JSON file.
    pub network_path: Option<PathBuf>,
    /// Script file with one command per line.
    pub script_path: Option<PathBuf>,
    /// Sink record id for snapshot pushes.
    pub sink_id: Option<String>,
    /// Snapshot size threshold in estimated bytes.
    pub size_threshold: Option<usize>,
    /// Turn neighbor highlighting off.
    pub no_neighbors: bool,
    /// Skip persistence entirely.
    pub no_persist: bool,
    /// Event labels whose snapshots are not pushed.
    pub skip_events: Vec<String>,
}
