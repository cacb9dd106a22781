//! Undo/redo round trips and branch precedence over VisState.

use provenance::{build_select_toggle_action, ProvenanceGraph, VisState};

use crate::common::star_network;

fn toggle(graph: &mut ProvenanceGraph<VisState>, id: &str) {
    let net = star_network();
    let node = net.node(id).expect("fixture node").clone();
    let action = build_select_toggle_action(&node, graph.current_state(), &net);
    graph.apply_action(&action).expect("toggle applies");
}

/// **Scenario**: N actions followed by N undos restore the initial state.
#[test]
fn n_undos_restore_root_state() {
    let initial = VisState::new();
    let mut graph = ProvenanceGraph::new(initial.clone());
    let ids = ["n1", "n3", "n1", "n4", "n2"];
    for id in ids {
        toggle(&mut graph, id);
    }
    for _ in 0..ids.len() {
        graph.go_back_one_step().expect("not at root yet");
    }
    assert_eq!(graph.current_state(), &initial);
    assert!(graph.go_back_one_step().is_none());
}

/// **Scenario**: apply A, undo, apply B, undo, redo lands on B.
#[test]
fn redo_after_branch_replays_newest() {
    let mut graph = ProvenanceGraph::new(VisState::new());
    toggle(&mut graph, "n1");
    let a = graph.current_state().clone();
    graph.go_back_one_step();
    toggle(&mut graph, "n3");
    let b = graph.current_state().clone();
    graph.go_back_one_step();
    graph.go_forward_one_step();
    assert_eq!(graph.current_state(), &b);
    assert_ne!(graph.current_state(), &a);
    // the older branch is still there
    let root = graph.node(graph.root_id()).unwrap();
    assert_eq!(root.children().len(), 2);
    assert_eq!(graph.node(root.children()[0]).unwrap().state(), &a);
}

/// **Scenario**: Toggling the same node twice returns `selected` to its pre-toggle value.
#[test]
fn select_toggle_is_idempotent_in_pairs() {
    let mut graph = ProvenanceGraph::new(VisState::new());
    toggle(&mut graph, "n3");
    let before = graph.current_state().selected.clone();
    toggle(&mut graph, "n1");
    toggle(&mut graph, "n1");
    assert_eq!(graph.current_state().selected, before);
    assert_eq!(graph.current_node().label(), "De-select Node");
}
