//! Run config: network file, script, sink id, size budget. Can be filled from env / .env.

use std::path::PathBuf;

use provenance::{PersistenceConfig, DEFAULT_SIZE_THRESHOLD};

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Sink id used when `PROV_SINK_ID` is not set.
pub const DEFAULT_SINK_ID: &str = "local-session";

/// Run config for one replay.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Network JSON file: `{"nodes": [...], "edges": [...]}`.
    pub network_path: PathBuf,
    /// Script file; when unset, commands come from the caller.
    pub script_path: Option<PathBuf>,
    /// Record id snapshots are pushed under.
    pub sink_id: String,
    /// Snapshots estimated above this are skipped.
    pub size_threshold: usize,
    /// Neighbor highlighting toggle.
    pub include_neighbors: bool,
    /// When false, no bridge is attached.
    pub persist: bool,
    /// Event labels never pushed.
    pub skip_events: Vec<String>,
}

impl RunConfig {
    /// Config with defaults for everything but the network file.
    pub fn new(network_path: impl Into<PathBuf>) -> Self {
        Self {
            network_path: network_path.into(),
            script_path: None,
            sink_id: DEFAULT_SINK_ID.to_string(),
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            include_neighbors: true,
            persist: true,
            skip_events: Vec::new(),
        }
    }

    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `run()`.
    ///
    /// `PROV_NETWORK` required; `PROV_SCRIPT`, `PROV_SINK_ID`, `PROV_SIZE_THRESHOLD`,
    /// `PROV_INCLUDE_NEIGHBORS` (true|false), `PROV_SKIP_EVENTS` (comma separated) optional.
    pub fn from_env() -> Result<Self, Error> {
        let network_path = std::env::var("PROV_NETWORK").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "PROV_NETWORK is not set; pass --network or configure it in .env",
            )
        })?;
        let mut config = Self::new(network_path);
        config.script_path = std::env::var("PROV_SCRIPT").ok().map(PathBuf::from);
        if let Ok(id) = std::env::var("PROV_SINK_ID") {
            config.sink_id = id;
        }
        if let Some(t) = std::env::var("PROV_SIZE_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.size_threshold = t;
        }
        if let Some(b) = std::env::var("PROV_INCLUDE_NEIGHBORS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.include_neighbors = b;
        }
        if let Ok(list) = std::env::var("PROV_SKIP_EVENTS") {
            config.skip_events = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(config)
    }

    /// Apply optional overrides from `RunOptions` to this config.
    ///
    /// Only set fields in `options` override.
    pub fn apply_options(&mut self, options: &super::RunOptions) {
        if let Some(p) = &options.network_path {
            self.network_path = p.clone();
        }
        if options.script_path.is_some() {
            self.script_path = options.script_path.clone();
        }
        if let Some(id) = &options.sink_id {
            self.sink_id = id.clone();
        }
        if let Some(t) = options.size_threshold {
            self.size_threshold = t;
        }
        if options.no_neighbors {
            self.include_neighbors = false;
        }
        if options.no_persist {
            self.persist = false;
        }
        if !options.skip_events.is_empty() {
            self.skip_events = options.skip_events.clone();
        }
    }

    /// Persistence config for the bridge.
    pub fn persistence_config(&self) -> PersistenceConfig {
        let mut config = PersistenceConfig::default().with_size_threshold(self.size_threshold);
        config.skip_events = self.skip_events.clone();
        config
    }
}
