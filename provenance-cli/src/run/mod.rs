//! Run entry points: run with default config, run_with_config, or run_with_options.
//!
//! Re-exports [`run`], [`run_with_config`], [`run_with_options`] and [`RunReport`].

pub use crate::config::Error;

mod run_with_config;

use crate::config::{RunConfig, RunOptions};
use crate::script::ScriptCommand;

pub use run_with_config::{run_with_config, RunReport};

/// Replay `commands` with config from env (and .env).
///
/// Loads `.env` internally, then calls `run_with_config`.
pub async fn run(commands: &[ScriptCommand]) -> Result<RunReport, Error> {
    dotenv::dotenv().ok();
    let config = RunConfig::from_env()?;
    run_with_config(&config, commands).await
}

/// Replay with config from env plus optional overrides (e.g. from CLI args).
///
/// Loads `.env`, builds `RunConfig` from env, applies `options`, then runs.
/// When `options.network_path` is set, a missing `PROV_NETWORK` is not an error.
pub async fn run_with_options(
    commands: &[ScriptCommand],
    options: &RunOptions,
) -> Result<RunReport, Error> {
    dotenv::dotenv().ok();
    let mut config = match (RunConfig::from_env(), &options.network_path) {
        (Ok(config), _) => config,
        (Err(_), Some(path)) => RunConfig::new(path.clone()),
        (Err(e), None) => return Err(e),
    };
    config.apply_options(options);
    run_with_config(&config, commands).await
}
