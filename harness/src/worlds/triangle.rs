//! `Triangle`: three nodes where the two-hop path beats the direct edge.
//!
//! All nodes share a position, so the straight-line heuristic is zero and
//! A* degenerates to uniform-cost search.

use pathlab_kernel::graph::{Graph, GraphError};

use crate::contract::GraphWorld;

pub struct Triangle;

impl GraphWorld for Triangle {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "triangle"
    }

    fn graph(&self) -> Result<Graph, GraphError> {
        Graph::builder()
            .node("A", 0, 0)
            .node("B", 0, 0)
            .node("C", 0, 0)
            .edge("A", "B", 1)
            .edge("B", "C", 1)
            .edge("A", "C", 5)
            .build()
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn default_start(&self) -> &str {
        "A"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn default_goal(&self) -> &str {
        "C"
    }
}
