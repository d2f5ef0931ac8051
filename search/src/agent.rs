//! Stepwise search agent.
//!
//! The agent owns nothing: it borrows one [`GraphProblem`] exclusively and
//! advances it one expansion at a time. Replay is reset plus re-run, so any
//! intermediate state of a run can be reconstructed from its step count.

use pathlab_kernel::graph::{Cost, NodeIndex, INFINITE_COST};

use crate::error::SearchError;
use crate::node::FrontierPopKey;
use crate::policy::SolvedWhen;
use crate::problem::GraphProblem;
use crate::trace::{ExpandEvent, RelaxationOutcome, RelaxationRecord};

/// Result of one `expand` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// The expanded key is the goal. `expanded` is true when the node was
    /// moved into the explored set first (`SolvedWhen::GoalExplored`).
    GoalReached { expanded: bool },
    /// One relaxation round ran. `discovered` counts successors newly added to
    /// the frontier; `improved` counts committed g improvements.
    Expanded { discovered: usize, improved: usize },
    /// The key was already explored: no relaxation happened.
    AlreadyExplored,
}

/// Drives a [`GraphProblem`] through its expansions.
#[derive(Debug)]
pub struct Agent<'p> {
    problem: &'p mut GraphProblem,
}

impl<'p> Agent<'p> {
    #[must_use]
    pub fn new(problem: &'p mut GraphProblem) -> Self {
        Self { problem }
    }

    #[must_use]
    pub fn problem(&self) -> &GraphProblem {
        self.problem
    }

    /// Expand `key`: move it to the explored set and relax its successors.
    ///
    /// Under [`SolvedWhen::GoalAtFrontierHead`], expanding the goal is a
    /// short-circuit that changes nothing. Expanding an explored or isolated
    /// node is a no-op round, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] (with no mutation) if `key` is
    /// not in the graph.
    pub fn expand(&mut self, key: &str) -> Result<ExpandOutcome, SearchError> {
        let ix = self.problem.resolve(key)?;
        Ok(self.expand_index(ix))
    }

    /// Expand the frontier head. Returns `None` when the frontier is empty
    /// or the problem is already solved.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the `Result` mirrors [`Agent::expand`].
    pub fn step(&mut self) -> Result<Option<ExpandOutcome>, SearchError> {
        if self.problem.is_solved() {
            return Ok(None);
        }
        Ok(self.problem.frontier.head().map(|head| self.expand_index(head)))
    }

    /// Expand frontier heads until the problem is solved, the frontier
    /// empties, or `step_limit` expansions ran. A `None` limit falls back to
    /// the policy's `max_expansions`.
    ///
    /// Returns the number of expansions executed. Never exceeds the node
    /// count: an explored node cannot re-enter the frontier.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the `Result` mirrors [`Agent::expand`].
    pub fn solve(&mut self, step_limit: Option<u64>) -> Result<u64, SearchError> {
        let limit = step_limit.or(self.problem.policy.max_expansions);
        let mut executed: u64 = 0;
        loop {
            if limit.is_some_and(|l| executed >= l) || self.step()?.is_none() {
                break;
            }
            executed += 1;
        }
        tracing::info!(
            start = self.problem.start_key(),
            goal = self.problem.goal_key(),
            executed,
            solved = self.problem.is_solved(),
            frontier = self.problem.frontier.len(),
            "search stopped"
        );
        Ok(executed)
    }

    /// Reset the problem and run `steps` expansions from scratch.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the `Result` mirrors [`Agent::solve`].
    pub fn replay(&mut self, steps: u64) -> Result<u64, SearchError> {
        self.problem.reset();
        self.solve(Some(steps))
    }

    fn expand_index(&mut self, ix: NodeIndex) -> ExpandOutcome {
        let problem = &mut *self.problem;
        let is_goal = ix == problem.goal;

        if is_goal && problem.policy.solved_when == SolvedWhen::GoalAtFrontierHead {
            tracing::debug!(node = problem.graph.key(ix), "goal reached");
            return ExpandOutcome::GoalReached { expanded: false };
        }

        let pop_key = FrontierPopKey::from(problem.state_at(ix));
        let newly_explored = problem.explore_index(ix);

        let mut relaxations = Vec::new();
        let outcome = if !newly_explored {
            ExpandOutcome::AlreadyExplored
        } else if is_goal {
            ExpandOutcome::GoalReached { expanded: true }
        } else {
            let (discovered, improved) = relax_successors(problem, ix, &mut relaxations);
            ExpandOutcome::Expanded {
                discovered,
                improved,
            }
        };

        // Unscored members (queued by hand, never relaxed) sort last.
        let states = &problem.states;
        problem.frontier.sort_by_cost(|n| {
            let state = &states[n.get()];
            if state.scored {
                state.total_cost
            } else {
                INFINITE_COST
            }
        });
        problem.refresh_frontier_classes();

        let frontier_after: Vec<String> = problem
            .frontier
            .queue()
            .iter()
            .map(|&n| problem.graph.key(n).to_string())
            .collect();
        tracing::debug!(
            node = problem.graph.key(ix),
            ?outcome,
            frontier = frontier_after.len(),
            explored = problem.frontier.explored().len(),
            "expanded node"
        );
        let event = ExpandEvent {
            expansion_order: problem.trace.next_order(),
            node: problem.graph.key(ix).to_string(),
            pop_key,
            outcome,
            relaxations,
            frontier_after,
        };
        problem.trace.push(event);
        outcome
    }
}

/// One relaxation round over the successors of `ix`. Returns
/// `(discovered, improved)`.
fn relax_successors(
    problem: &mut GraphProblem,
    ix: NodeIndex,
    relaxations: &mut Vec<RelaxationRecord>,
) -> (usize, usize) {
    let parent = problem.state_at(ix).clone();
    let parent_g: Cost = if parent.scored {
        parent.cost_so_far
    } else {
        INFINITE_COST
    };
    let successors: Vec<NodeIndex> = problem.graph.neighbors(ix).collect();

    let mut discovered = 0;
    let mut improved = 0;
    for s in successors {
        if problem.frontier.is_explored(s) {
            continue;
        }
        let newly_queued = problem.queue_index(s);
        if newly_queued {
            discovered += 1;
        }

        let tentative = parent_g.saturating_add(problem.graph.edge_cost(ix, s));
        let outcome = if tentative == INFINITE_COST || !problem.states[s.get()].improves(tentative)
        {
            RelaxationOutcome::NotImproved { tentative }
        } else {
            let estimated_cost = problem.heuristic.estimate(&problem.graph, s, problem.goal);
            let total_cost = problem.policy.strategy.total_cost(tentative, estimated_cost);
            let depth = parent.depth.saturating_add(1);
            let state = &mut problem.states[s.get()];
            state.cost_so_far = tentative;
            state.estimated_cost = estimated_cost;
            state.total_cost = total_cost;
            state.depth = depth;
            state.parent = Some(ix);
            state.scored = true;
            improved += 1;
            RelaxationOutcome::Improved {
                cost_so_far: tentative,
                estimated_cost,
                total_cost,
                depth,
            }
        };
        tracing::trace!(
            from = problem.graph.key(ix),
            to = problem.graph.key(s),
            tentative,
            improved = matches!(outcome, RelaxationOutcome::Improved { .. }),
            "relaxed edge"
        );
        relaxations.push(RelaxationRecord {
            node: problem.graph.key(s).to_string(),
            discovered: newly_queued,
            outcome,
        });
    }
    (discovered, improved)
}
