//! Search policy types.

use pathlab_kernel::graph::geometry::DEFAULT_UNIT_DISTANCE;
use pathlab_kernel::graph::Cost;
use pathlab_kernel::proof::canon::canonical_json_hash;
use pathlab_kernel::proof::hash::{ContentHash, HashDomain};

use crate::error::SearchError;

/// How the frontier ordering key `f` is formed, and which heuristic a
/// problem plugs in by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `f = g + h` with the straight-line heuristic.
    AStar,
    /// `f = g`, `h = 0` (Dijkstra).
    UniformCost,
    /// `f = h`. Not optimal; `g` is still tracked for the path.
    GreedyBestFirst,
}

impl Strategy {
    /// Combine `g` and `h` into the frontier ordering key.
    #[must_use]
    pub fn total_cost(self, cost_so_far: Cost, estimated_cost: Cost) -> Cost {
        match self {
            Self::AStar => cost_so_far.saturating_add(estimated_cost),
            Self::UniformCost => cost_so_far,
            Self::GreedyBestFirst => estimated_cost,
        }
    }

    /// Whether the strategy consults a heuristic at all.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        !matches!(self, Self::UniformCost)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "a_star",
            Self::UniformCost => "uniform_cost",
            Self::GreedyBestFirst => "greedy_best_first",
        }
    }
}

/// When a problem reports itself solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolvedWhen {
    /// The goal is the frontier head, i.e. it would be expanded next.
    /// The agent short-circuits instead of expanding it. Default.
    GoalAtFrontierHead,
    /// The goal has been moved into the explored set.
    GoalExplored,
}

impl SolvedWhen {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalAtFrontierHead => "goal_at_frontier_head",
            Self::GoalExplored => "goal_explored",
        }
    }
}

/// Search configuration bound to a problem for its lifetime.
///
/// `unit_distance` is the single divisor shared by coordinate-derived edge
/// costs and the straight-line heuristic. Keeping one field for both is what
/// keeps the default heuristic comparable to edge costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    pub solved_when: SolvedWhen,
    /// Pixels per unit of cost.
    pub unit_distance: i64,
    /// Default step limit for [`crate::Agent::solve`]. `None` means the run
    /// is bounded only by the node count.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Validate ranges before a problem is built.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `unit_distance` is not
    /// positive.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.unit_distance <= 0 {
            return Err(SearchError::InvalidPolicy {
                detail: format!("unit_distance must be positive, got {}", self.unit_distance),
            });
        }
        Ok(())
    }

    /// JSON echo of the policy, recorded alongside traces.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "solved_when": self.solved_when.as_str(),
            "strategy": self.strategy.as_str(),
            "unit_distance": self.unit_distance,
        })
    }

    /// Content digest of the policy echo.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        Ok(canonical_json_hash(
            HashDomain::SearchPolicy,
            &self.to_json_value(),
        )?)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: Strategy::AStar,
            solved_when: SolvedWhen::GoalAtFrontierHead,
            unit_distance: DEFAULT_UNIT_DISTANCE,
            max_expansions: None,
        }
    }
}
