//! Node selection toggle and clear.

use crate::selection::{Network, NetworkNode};
use crate::state::VisState;

use super::{Action, EventKind};

/// Builds the action that toggles `node` in `current.selected`.
///
/// Membership is read now: if `node` is selected the action removes it
/// ("De-select Node"), otherwise it inserts `node.id` with its direct
/// neighbors as found in `network` ("Select Node"). The neighbor list is
/// computed here and captured, not recomputed on replay.
pub fn build_select_toggle_action(
    node: &NetworkNode,
    current: &VisState,
    network: &Network,
) -> Action<VisState> {
    let node_id = node.id.clone();
    if current.selected.contains(&node_id) {
        let kind = EventKind::DeselectNode;
        let label = kind.label().to_string();
        Action::new(kind, move |mut state: VisState| {
            state.selected.remove(&node_id);
            state.event = label.clone();
            Ok(state)
        })
    } else {
        let neighbors = network.direct_neighbors(&node_id);
        let kind = EventKind::SelectNode;
        let label = kind.label().to_string();
        Action::new(kind, move |mut state: VisState| {
            state.selected.insert(node_id.clone(), neighbors.clone());
            state.event = label.clone();
            Ok(state)
        })
    }
}

/// Builds the action that empties node and edge selections.
pub fn build_clear_selection_action() -> Action<VisState> {
    let kind = EventKind::ClearSelection;
    let label = kind.label().to_string();
    Action::new(kind, move |mut state: VisState| {
        state.selected.clear();
        state.user_selected_edges.clear();
        state.event = label.clone();
        Ok(state)
    })
}
