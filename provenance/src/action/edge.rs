//! Edge selection toggle.

use crate::state::VisState;

use super::{Action, EventKind};

/// Builds the action that toggles `edge_id` in `userSelectedEdges`.
pub fn build_edge_toggle_action(edge_id: &str, current: &VisState) -> Action<VisState> {
    let edge_id = edge_id.to_string();
    let selected = current.user_selected_edges.contains(&edge_id);
    let kind = if selected {
        EventKind::DeselectEdge
    } else {
        EventKind::SelectEdge
    };
    let label = kind.label().to_string();
    Action::new(kind, move |mut state: VisState| {
        if selected {
            state.user_selected_edges.remove(&edge_id);
        } else {
            state.user_selected_edges.insert(edge_id.clone());
        }
        state.event = label.clone();
        Ok(state)
    })
}
