//! Walk-through: select n1, select n3, undo.

use provenance::{Selection, Session, VisState};

use crate::common::star_network;

fn selection(entries: &[(&str, &[&str])]) -> Selection {
    entries
        .iter()
        .map(|(k, v)| (*k, v.iter().map(|s| s.to_string()).collect::<Vec<_>>()))
        .collect()
}

/// **Scenario**: root {} → select n1 → select n3 → undo.
#[test]
fn select_select_undo() {
    let mut session = Session::new(star_network(), VisState::new(), true);

    session.select_node("n1").unwrap();
    assert_eq!(session.current_state().selected, selection(&[("n1", &["n2"][..])]));

    session.select_node("n3").unwrap();
    assert_eq!(
        session.current_state().selected,
        selection(&[("n1", &["n2"][..]), ("n3", &["n2"][..])])
    );
    let derived = session.derived_selection();
    assert_eq!(derived.neighbors.iter().collect::<Vec<_>>(), vec!["n2"]);
    assert_eq!(derived.edges.len(), 2);

    session.undo();
    assert_eq!(session.current_state().selected, selection(&[("n1", &["n2"][..])]));
    assert_eq!(
        session.history_labels(),
        vec!["Initialize Provenance", "Select Node"]
    );
}
