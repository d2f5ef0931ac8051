//! Shared helpers for pathlab benchmark suites.

use pathlab_harness::contract::GraphWorld;
use pathlab_kernel::graph::geometry::DEFAULT_UNIT_DISTANCE;
use pathlab_kernel::graph::{Graph, GraphError};
use pathlab_search::{GraphProblem, SearchPolicy};

/// Spacing between grid nodes, in pixels. Two units per hop.
const GRID_SPACING: i32 = 64;

/// Square `side`×`side` lattice with 4-neighbour edges. Start is the top-left
/// corner, goal the bottom-right.
pub struct GridWorld {
    side: usize,
    start: String,
    goal: String,
}

impl GridWorld {
    #[must_use]
    pub fn new(side: usize) -> Self {
        let last = side.saturating_sub(1);
        Self {
            side,
            start: grid_key(0, 0),
            goal: grid_key(last, last),
        }
    }
}

fn grid_key(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

fn grid_coord(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX / GRID_SPACING) * GRID_SPACING
}

impl GraphWorld for GridWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid"
    }

    fn graph(&self) -> Result<Graph, GraphError> {
        let mut builder = Graph::builder();
        for row in 0..self.side {
            for col in 0..self.side {
                builder = builder.node(grid_key(row, col), grid_coord(col), grid_coord(row));
            }
        }
        for row in 0..self.side {
            for col in 0..self.side {
                if col + 1 < self.side {
                    builder = builder.edge_unweighted(grid_key(row, col), grid_key(row, col + 1));
                }
                if row + 1 < self.side {
                    builder = builder.edge_unweighted(grid_key(row, col), grid_key(row + 1, col));
                }
            }
        }
        builder.build_weighted(DEFAULT_UNIT_DISTANCE)
    }

    fn default_start(&self) -> &str {
        &self.start
    }

    fn default_goal(&self) -> &str {
        &self.goal
    }
}

/// Fresh (reset) problem over `world`'s default endpoints.
///
/// # Panics
///
/// Panics if the world's graph or endpoints are invalid. Benchmark setup
/// failures are fatal.
pub fn problem_for(world: &dyn GraphWorld, policy: SearchPolicy) -> GraphProblem {
    let graph = world.graph().expect("world graph");
    GraphProblem::new(graph, world.default_start(), world.default_goal(), policy)
        .expect("problem construction")
}
