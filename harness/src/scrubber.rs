//! Scrubber: random-access stepping through one search run.
//!
//! On every reset the scrubber solves the problem once to learn the total
//! step count, then resets again. Moving to step `n` is `reset` followed by
//! `n` expansions, so the problem state after `seek(n)` is identical to the
//! state after `n` incremental steps.
//!
//! # Lifecycle
//!
//! ```text
//! for_world() → reset() → [seek(n) | step_forward() | step_backward()]* → snapshot()
//!                 ↑
//!   set_start() / set_goal()
//! ```

use pathlab_kernel::graph::GraphError;
use pathlab_search::{Agent, GraphProblem, SearchError, SearchSnapshot};

use crate::config::ScrubberConfig;
use crate::contract::GraphWorld;

/// Error building or driving a scrubber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrubError {
    /// The world could not produce its graph.
    World(GraphError),
    /// Problem construction or an agent operation failed.
    Search(SearchError),
}

impl std::fmt::Display for ScrubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World(e) => write!(f, "world error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl std::error::Error for ScrubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GraphError> for ScrubError {
    fn from(e: GraphError) -> Self {
        Self::World(e)
    }
}

impl From<SearchError> for ScrubError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// A problem plus a cursor into its run.
#[derive(Debug)]
pub struct Scrubber {
    world_id: String,
    problem: GraphProblem,
    iterations_count: u64,
    max_iterations_count: u64,
}

impl Scrubber {
    /// Build a scrubber over `world`, applying `config` overrides.
    ///
    /// Derived edge costs are recomputed under the policy's unit so the
    /// heuristic and the edge weights always share one divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::World`] if the world's graph is invalid and
    /// [`ScrubError::Search`] for an invalid policy or unknown endpoint.
    pub fn for_world(world: &dyn GraphWorld, config: &ScrubberConfig) -> Result<Self, ScrubError> {
        let graph = world.graph()?;
        let policy = config.policy_for(&graph);
        policy.validate()?;
        let graph = graph.with_unit_distance(policy.unit_distance)?;
        let (start, goal) = config.endpoints(world);
        let problem = GraphProblem::new(graph, start, goal, policy)?;
        Self::from_problem(world.world_id(), problem)
    }

    /// Wrap an existing problem. The problem is reset.
    ///
    /// # Errors
    ///
    /// As [`Scrubber::reset`].
    pub fn from_problem(
        world_id: impl Into<String>,
        problem: GraphProblem,
    ) -> Result<Self, ScrubError> {
        let mut scrubber = Self {
            world_id: world_id.into(),
            problem,
            iterations_count: 0,
            max_iterations_count: 0,
        };
        scrubber.reset()?;
        Ok(scrubber)
    }

    /// Re-derive the total step count and rewind to step 0.
    ///
    /// # Errors
    ///
    /// Propagates agent errors (none occur for a well-formed problem).
    pub fn reset(&mut self) -> Result<(), ScrubError> {
        self.problem.reset();
        self.max_iterations_count = Agent::new(&mut self.problem).solve(None)?;
        self.problem.reset();
        self.iterations_count = 0;
        tracing::debug!(
            world = %self.world_id,
            start = self.problem.start_key(),
            goal = self.problem.goal_key(),
            max_iterations = self.max_iterations_count,
            "scrubber reset"
        );
        Ok(())
    }

    /// Move to step `n`, clamped to `[0, max_iterations_count]`. Returns the
    /// step actually reached.
    ///
    /// # Errors
    ///
    /// Propagates agent errors (none occur for a well-formed problem).
    pub fn seek(&mut self, n: u64) -> Result<u64, ScrubError> {
        let target = n.min(self.max_iterations_count);
        Agent::new(&mut self.problem).replay(target)?;
        self.iterations_count = target;
        tracing::trace!(world = %self.world_id, step = target, "scrubber seek");
        Ok(target)
    }

    /// # Errors
    ///
    /// As [`Scrubber::seek`].
    pub fn step_forward(&mut self) -> Result<u64, ScrubError> {
        self.seek(self.iterations_count.saturating_add(1))
    }

    /// # Errors
    ///
    /// As [`Scrubber::seek`].
    pub fn step_backward(&mut self) -> Result<u64, ScrubError> {
        self.seek(self.iterations_count.saturating_sub(1))
    }

    #[must_use]
    pub fn can_step_forward(&self) -> bool {
        self.iterations_count < self.max_iterations_count
    }

    #[must_use]
    pub fn can_step_backward(&self) -> bool {
        self.iterations_count > 0
    }

    /// Pick a new start key, keeping the goal, and reset.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::Search`] (and changes nothing) for an unknown key.
    pub fn set_start(&mut self, key: &str) -> Result<(), ScrubError> {
        let goal = self.problem.goal_key().to_string();
        self.problem.retarget(key, &goal)?;
        self.reset()
    }

    /// Pick a new goal key, keeping the start, and reset.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::Search`] (and changes nothing) for an unknown key.
    pub fn set_goal(&mut self, key: &str) -> Result<(), ScrubError> {
        let start = self.problem.start_key().to_string();
        self.problem.retarget(&start, key)?;
        self.reset()
    }

    /// Render view at the current step.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot::capture(&self.problem)
    }

    #[must_use]
    pub fn world_id(&self) -> &str {
        &self.world_id
    }

    #[must_use]
    pub fn problem(&self) -> &GraphProblem {
        &self.problem
    }

    #[must_use]
    pub fn iterations_count(&self) -> u64 {
        self.iterations_count
    }

    #[must_use]
    pub fn max_iterations_count(&self) -> u64 {
        self.max_iterations_count
    }
}
