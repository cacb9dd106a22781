//! Node lookup for the search box.

use super::network::Network;

/// Index of the first node whose id or `label` equals `term`.
///
/// An empty node list and a list without a match both yield `None`.
pub fn search_for(network: &Network, term: &str) -> Option<usize> {
    network
        .nodes
        .iter()
        .position(|n| n.id == term || n.label() == Some(term))
}
