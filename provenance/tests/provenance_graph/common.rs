//! Shared fixtures: a small network where n1 and n3 both neighbor n2.

use provenance::{Network, NetworkEdge, NetworkNode};

pub fn star_network() -> Network {
    Network::new(
        vec![
            NetworkNode::new("n1").with_label("First"),
            NetworkNode::new("n2"),
            NetworkNode::new("n3"),
            NetworkNode::new("n4"),
        ],
        vec![
            NetworkEdge::new("e12", "n1", "n2"),
            NetworkEdge::new("e32", "n3", "n2"),
        ],
    )
}
