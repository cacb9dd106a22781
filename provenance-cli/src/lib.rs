//! provenance-cli library: replay a scripted interaction session.
//!
//! Reads a network JSON file and a list of interaction commands, drives a
//! [`Session`](provenance::Session) through them with an in-memory sink attached,
//! and returns a [`RunReport`] with the final state, highlight sets and history.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let commands = provenance_cli::parse_script("select n1\nundo\n")?;
//! let report = provenance_cli::run(&commands).await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

mod config;
mod run;
mod script;

pub use config::{Error, RunConfig, RunOptions};
pub use run::{run, run_with_config, run_with_options, RunReport};
pub use script::{parse_script, ScriptCommand, ScriptError};

#[cfg(test)]
mod tests;
