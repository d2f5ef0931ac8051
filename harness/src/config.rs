//! Scrubber configuration: optional overrides on top of world defaults.
//!
//! Every field is `None` by default, meaning "use the world's default" for
//! endpoints and [`SearchPolicy::default`] for policy fields.

use pathlab_kernel::graph::Graph;
use pathlab_search::{SearchPolicy, SolvedWhen, Strategy};

use crate::contract::GraphWorld;

/// Overrides accepted by [`crate::scrubber::Scrubber::for_world`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrubberConfig {
    /// Start key. `None` uses the world's default.
    pub start: Option<String>,
    /// Goal key. `None` uses the world's default.
    pub goal: Option<String>,
    pub strategy: Option<Strategy>,
    pub solved_when: Option<SolvedWhen>,
    /// Pixels per cost unit, for both derived edge costs and the heuristic.
    /// `None` keeps the graph's own unit, or the policy default (32) for a
    /// graph whose costs are all explicit.
    pub unit_distance: Option<i64>,
    /// Cap on the precomputed step count. `None` leaves it bounded by the
    /// node count only.
    pub max_expansions: Option<u64>,
}

impl ScrubberConfig {
    /// The policy these overrides describe.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        let defaults = SearchPolicy::default();
        SearchPolicy {
            strategy: self.strategy.unwrap_or(defaults.strategy),
            solved_when: self.solved_when.unwrap_or(defaults.solved_when),
            unit_distance: self.unit_distance.unwrap_or(defaults.unit_distance),
            max_expansions: self.max_expansions.or(defaults.max_expansions),
        }
    }

    /// The policy for a search over `graph`: an unset unit inherits the
    /// unit of the graph's derived edge costs.
    #[must_use]
    pub fn policy_for(&self, graph: &Graph) -> SearchPolicy {
        let mut policy = self.policy();
        if self.unit_distance.is_none() {
            if let Some(unit) = graph.unit_distance() {
                policy.unit_distance = unit;
            }
        }
        policy
    }

    /// Start and goal keys, falling back to the world's defaults.
    #[must_use]
    pub fn endpoints<'a>(&'a self, world: &'a dyn GraphWorld) -> (&'a str, &'a str) {
        (
            self.start.as_deref().unwrap_or_else(|| world.default_start()),
            self.goal.as_deref().unwrap_or_else(|| world.default_goal()),
        )
    }
}
