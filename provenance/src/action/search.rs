//! Search: log the hit and bring it into the selection.

use crate::selection::{Network, NetworkNode};
use crate::state::VisState;

use super::{Action, EventKind};

/// Builds the "Search" action for a node the search box resolved.
///
/// Appends `node.id` to the search log. If the node is not selected yet it is
/// selected with its direct neighbors; a node already selected stays as is.
pub fn build_search_action(node: &NetworkNode, current: &VisState, network: &Network) -> Action<VisState> {
    let node_id = node.id.clone();
    let select = (!current.selected.contains(&node_id)).then(|| network.direct_neighbors(&node_id));
    let kind = EventKind::Search;
    let label = kind.label().to_string();
    Action::new(kind, move |mut state: VisState| {
        state.search.push(node_id.clone());
        if let Some(neighbors) = &select {
            state.selected.insert(node_id.clone(), neighbors.clone());
        }
        state.event = label.clone();
        Ok(state)
    })
}
