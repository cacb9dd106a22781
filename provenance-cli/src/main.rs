//! Replay binary: parse args, replay the interaction script, print the report as JSON.

use std::path::PathBuf;

use clap::Parser;
use provenance_cli::{run_with_options, RunOptions, ScriptCommand};

#[derive(Parser, Debug)]
#[command(name = "provenance")]
#[command(about = "Replay node/edge/search interactions against a network and print the resulting history")]
struct Args {
    /// Network JSON file (overrides PROV_NETWORK)
    #[arg(short, long, value_name = "FILE")]
    network: Option<PathBuf>,

    /// Script file, one command per line (overrides PROV_SCRIPT)
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Sink record id (overrides PROV_SINK_ID)
    #[arg(long, value_name = "ID")]
    sink_id: Option<String>,

    /// Snapshot size threshold in estimated bytes (overrides PROV_SIZE_THRESHOLD)
    #[arg(long, value_name = "BYTES")]
    threshold: Option<usize>,

    /// Highlight only selected nodes, not their neighbors
    #[arg(long)]
    no_neighbors: bool,

    /// Do not push snapshots
    #[arg(long)]
    no_persist: bool,

    /// Event label whose snapshots are not pushed (repeatable)
    #[arg(long = "skip-event", value_name = "LABEL")]
    skip_events: Vec<String>,

    /// Debug logs on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Inline commands run after the script, e.g. `"select n1" "undo"`
    #[arg(trailing_var_arg = true)]
    commands: Vec<String>,
}

impl Args {
    fn options(&self) -> RunOptions {
        RunOptions {
            network_path: self.network.clone(),
            script_path: self.script.clone(),
            sink_id: self.sink_id.clone(),
            size_threshold: self.threshold,
            no_neighbors: self.no_neighbors,
            no_persist: self.no_persist,
            skip_events: self.skip_events.clone(),
        }
    }
}

/// Logs go to stderr so stdout stays a clean JSON report.
fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if verbose {
            "debug"
        } else {
            "info"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let commands = match args
        .commands
        .iter()
        .map(|c| c.parse::<ScriptCommand>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let report = match run_with_options(&commands, &args.options()).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("history: {}", report.history.join(" -> "));
    Ok(())
}
