//! Replays a script against a network with a given config.

use std::sync::Arc;

use provenance::{
    InMemorySink, Network, NodeId, PersistenceBridge, PushOutcome, Session, VisState,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::{Error, RunConfig};
use crate::script::{parse_script, ScriptCommand};

/// Result of one replay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Current node, state and derived selection at the end of the replay.
    pub snapshot: Value,
    /// Event labels from the root to the current node.
    pub history: Vec<String>,
    /// Total nodes in the provenance tree, including abandoned branches.
    pub node_count: usize,
    /// One entry per persistence push, in push order.
    pub pushes: Vec<String>,
    /// The stored sink record, when persistence was on.
    pub record: Option<Value>,
}

/// Loads the network and script named by `config`, replays the script then `commands`,
/// and reports the final state.
///
/// Unknown node or edge ids and unknown history nodes abort the replay with an error.
/// A search with no match, or undo/redo at the ends of history, is logged and skipped.
pub async fn run_with_config(
    config: &RunConfig,
    commands: &[ScriptCommand],
) -> Result<RunReport, Error> {
    let raw = std::fs::read_to_string(&config.network_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("reading network {}: {}", config.network_path.display(), e),
        )
    })?;
    let network: Network = serde_json::from_str(&raw)?;
    tracing::info!(
        nodes = network.nodes.len(),
        edges = network.edges.len(),
        "network loaded"
    );

    let mut script = match &config.script_path {
        Some(path) => parse_script(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    script.extend_from_slice(commands);

    let mut session = Session::new(network, VisState::new(), config.include_neighbors);
    let sink = Arc::new(InMemorySink::new());
    if config.persist {
        let bridge = PersistenceBridge::new(sink.clone(), config.persistence_config());
        session = session.with_persistence(bridge, config.sink_id.clone());
    }

    for command in &script {
        apply_command(&mut session, command)?;
    }

    let outcomes = session.flush().await;
    Ok(RunReport {
        snapshot: session.render_snapshot(),
        history: session.history_labels(),
        node_count: session.provenance().len(),
        pushes: outcomes.iter().map(describe_outcome).collect(),
        record: config.persist.then(|| sink.record(&config.sink_id)).flatten(),
    })
}

fn apply_command(session: &mut Session, command: &ScriptCommand) -> Result<(), Error> {
    tracing::debug!(%command, "replaying");
    match command {
        ScriptCommand::Select(id) => {
            session.select_node(id)?;
        }
        ScriptCommand::Edge(id) => {
            session.toggle_edge(id)?;
        }
        ScriptCommand::Search(term) => {
            if session.search(term)?.is_none() {
                tracing::info!(%term, "search matched nothing");
            }
        }
        ScriptCommand::Clear => {
            session.clear_selection()?;
        }
        ScriptCommand::Undo => {
            if session.undo().is_none() {
                tracing::info!("undo at root, skipped");
            }
        }
        ScriptCommand::Redo => {
            if session.redo().is_none() {
                tracing::info!("redo with no children, skipped");
            }
        }
        ScriptCommand::Goto(index) => {
            session.go_to(NodeId::from_index(*index))?;
        }
    }
    Ok(())
}

fn describe_outcome(outcome: &PushOutcome) -> String {
    match outcome {
        PushOutcome::Created => "created".to_string(),
        PushOutcome::Appended => "appended".to_string(),
        PushOutcome::Skipped(reason) => format!("skipped: {:?}", reason),
        PushOutcome::Failed(e) => format!("failed: {}", e),
    }
}
