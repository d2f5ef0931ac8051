//! `Disconnected`: two components, goal unreachable from the start.

use pathlab_kernel::graph::{Graph, GraphError};

use crate::contract::GraphWorld;

pub struct Disconnected;

impl GraphWorld for Disconnected {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "disconnected"
    }

    fn graph(&self) -> Result<Graph, GraphError> {
        Graph::builder()
            .node("A", 40, 40)
            .node("B", 104, 40)
            .node("C", 40, 104)
            .node("D", 300, 200)
            .node("E", 364, 200)
            .edge_unweighted("A", "B")
            .edge_unweighted("A", "C")
            .edge_unweighted("B", "C")
            .edge_unweighted("D", "E")
            .build_weighted(32)
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn default_start(&self) -> &str {
        "A"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn default_goal(&self) -> &str {
        "E"
    }
}
