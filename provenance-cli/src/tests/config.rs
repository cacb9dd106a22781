//! Unit tests for [`RunConfig`](crate::config::RunConfig).
//!
//! Scenarios: from_env with/without PROV_NETWORK, optional vars, apply_options overrides.
//! Tests that touch PROV_* vars share a lock so they do not race on the environment.

use std::path::PathBuf;
use std::sync::Mutex;

use provenance::DEFAULT_SIZE_THRESHOLD;

use crate::config::{RunConfig, RunOptions};

const VARS: [&str; 6] = [
    "PROV_NETWORK",
    "PROV_SCRIPT",
    "PROV_SINK_ID",
    "PROV_SIZE_THRESHOLD",
    "PROV_INCLUDE_NEIGHBORS",
    "PROV_SKIP_EVENTS",
];

static ENV_LOCK: std::sync::OnceLock<Mutex<()>> = std::sync::OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// Runs `f` with exactly `vars` set among the PROV_* variables, restoring them afterwards.
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = env_lock();
    let saved: Vec<_> = VARS.iter().map(|k| (*k, std::env::var(k).ok())).collect();
    for k in VARS {
        std::env::remove_var(k);
    }
    for (k, v) in vars {
        std::env::set_var(k, v);
    }
    let out = f();
    for (k, v) in saved {
        match v {
            Some(v) => std::env::set_var(k, v),
            None => std::env::remove_var(k),
        }
    }
    out
}

/// **Scenario**: When PROV_NETWORK is not set, from_env returns an error naming it.
///
/// Given: no PROV_* variables  
/// When: RunConfig::from_env() is called  
/// Then: result is Err and the message mentions PROV_NETWORK
#[test]
fn from_env_fails_when_network_is_missing() {
    let result = with_env(&[], RunConfig::from_env);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("PROV_NETWORK"), "unexpected error: {}", err);
}

/// **Scenario**: Only PROV_NETWORK set gives defaults for everything else.
///
/// Given: PROV_NETWORK=net.json  
/// When: RunConfig::from_env() is called  
/// Then: default sink id, default threshold, neighbors on, persistence on
#[test]
fn from_env_uses_defaults() {
    let config = with_env(&[("PROV_NETWORK", "net.json")], RunConfig::from_env).unwrap();
    assert_eq!(config.network_path, PathBuf::from("net.json"));
    assert_eq!(config.script_path, None);
    assert_eq!(config.sink_id, "local-session");
    assert_eq!(config.size_threshold, DEFAULT_SIZE_THRESHOLD);
    assert!(config.include_neighbors);
    assert!(config.persist);
    assert!(config.skip_events.is_empty());
}

/// **Scenario**: Optional variables are read; unparsable numbers fall back to defaults.
///
/// Given: all PROV_* set, PROV_SIZE_THRESHOLD not a number  
/// When: RunConfig::from_env() is called  
/// Then: every valid variable is applied and the threshold stays at its default
#[test]
fn from_env_reads_optional_vars() {
    let config = with_env(
        &[
            ("PROV_NETWORK", "net.json"),
            ("PROV_SCRIPT", "s.txt"),
            ("PROV_SINK_ID", "abc"),
            ("PROV_SIZE_THRESHOLD", "lots"),
            ("PROV_INCLUDE_NEIGHBORS", "false"),
            ("PROV_SKIP_EVENTS", "Search, Select Edge,"),
        ],
        RunConfig::from_env,
    )
    .unwrap();
    assert_eq!(config.script_path, Some(PathBuf::from("s.txt")));
    assert_eq!(config.sink_id, "abc");
    assert_eq!(config.size_threshold, DEFAULT_SIZE_THRESHOLD);
    assert!(!config.include_neighbors);
    assert_eq!(config.skip_events, vec!["Search", "Select Edge"]);
}

/// **Scenario**: apply_options overrides only the fields that are set.
///
/// Given: a config with a sink id and threshold  
/// When: options set network, threshold and no_neighbors  
/// Then: those change; sink id and persistence are kept
#[test]
fn apply_options_overrides_set_fields_only() {
    let mut config = RunConfig::new("a.json");
    config.sink_id = "keep".into();
    let options = RunOptions {
        network_path: Some("b.json".into()),
        size_threshold: Some(10),
        no_neighbors: true,
        ..Default::default()
    };
    config.apply_options(&options);
    assert_eq!(config.network_path, PathBuf::from("b.json"));
    assert_eq!(config.size_threshold, 10);
    assert!(!config.include_neighbors);
    assert_eq!(config.sink_id, "keep");
    assert!(config.persist);

    let pc = config.persistence_config();
    assert_eq!(pc.size_threshold, 10);
}

/// **Scenario**: skip_events flows into the persistence config.
#[test]
fn persistence_config_carries_skip_events() {
    let mut config = RunConfig::new("a.json");
    config.apply_options(&RunOptions {
        skip_events: vec!["Search".into()],
        ..Default::default()
    });
    assert!(config.persistence_config().skips("Search"));
    assert!(!config.persistence_config().skips("Select Node"));
}
