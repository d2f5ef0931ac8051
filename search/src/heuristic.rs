//! Built-in heuristics.

use pathlab_kernel::graph::geometry::scaled_distance;
use pathlab_kernel::graph::{Cost, Graph, NodeIndex};

use crate::contract::Heuristic;
use crate::policy::{SearchPolicy, Strategy};

/// Straight-line distance to the goal in `unit`s, rounded to nearest.
///
/// Admissible whenever edge costs were derived from positions with the same
/// unit and rounding does not undercut a multi-edge detour (true for graphs
/// whose edges are laid out on whole units).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuclideanHeuristic {
    pub unit: i64,
}

impl Heuristic for EuclideanHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "euclidean"
    }

    fn estimate(&self, graph: &Graph, from: NodeIndex, goal: NodeIndex) -> Cost {
        let a = graph.node(from).position();
        let b = graph.node(goal).position();
        scaled_distance(a, b, self.unit)
    }
}

/// `h = 0`: turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "zero"
    }

    fn estimate(&self, _graph: &Graph, _from: NodeIndex, _goal: NodeIndex) -> Cost {
        0
    }
}

/// The heuristic a policy implies when none is plugged in explicitly.
#[must_use]
pub fn default_heuristic(policy: &SearchPolicy) -> Box<dyn Heuristic> {
    match policy.strategy {
        Strategy::UniformCost => Box::new(ZeroHeuristic),
        Strategy::AStar | Strategy::GreedyBestFirst => Box::new(EuclideanHeuristic {
            unit: policy.unit_distance,
        }),
    }
}
