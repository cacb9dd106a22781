//! Observer firing discipline through a Session.

use std::sync::{Arc, Mutex};

use provenance::{Session, VisState};

use crate::common::star_network;

/// **Scenario**: An observer on `selected` ignores search-log-only changes and fires on selection changes.
#[test]
fn selected_observer_ignores_search_only_change() {
    let mut initial = VisState::new();
    initial.selected.insert("n1", vec!["n2".into()]);
    let mut session = Session::new(star_network(), initial, true);

    let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.observe(["selected"], move |state: &VisState| {
        sink.lock().unwrap().push(state.selected_ids());
        Ok(())
    });

    // n1 is already selected: search only appends to the log
    session.search("First").unwrap().expect("hit");
    assert!(seen.lock().unwrap().is_empty());

    session.select_node("n3").unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![vec!["n1".to_string(), "n3".to_string()]]);

    session.undo();
    assert_eq!(seen.lock().unwrap().len(), 2);
    // undoing the search changes only `search`
    session.undo();
    assert_eq!(seen.lock().unwrap().len(), 2);
}

/// **Scenario**: A failing observer is reported in the transition while later observers still run.
#[test]
fn failing_observer_is_isolated() {
    let mut session = Session::new(star_network(), VisState::new(), true);
    let ran = Arc::new(Mutex::new(false));
    session.observe(["selected"], |_s: &VisState| Err("render failed".into()));
    let flag = ran.clone();
    session.observe(["selected", "userSelectedEdges"], move |_s: &VisState| {
        *flag.lock().unwrap() = true;
        Ok(())
    });

    let t = session.select_node("n1").unwrap();
    assert_eq!(t.observer_failures.len(), 1);
    assert!(*ran.lock().unwrap());
    assert!(session.current_state().selected.contains("n1"));
}
