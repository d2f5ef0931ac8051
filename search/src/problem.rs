//! `GraphProblem`: a graph bound to a start and a goal, plus the mutable
//! bookkeeping of one search run.
//!
//! The topology is immutable; everything a run changes (frontier, explored
//! set, per-node scores, trace) lives beside it and is rebuilt by
//! [`GraphProblem::reset`]. Public queries take string keys and report
//! unknown keys as [`SearchError::UnknownNode`].

use pathlab_kernel::graph::{Cost, Graph, Node, NodeIndex};

use crate::contract::Heuristic;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::default_heuristic;
use crate::node::{Classification, NodeState};
use crate::policy::{SearchPolicy, SolvedWhen};
use crate::trace::{SearchTrace, TraceHeader};

/// A search problem over one graph.
#[derive(Debug)]
pub struct GraphProblem {
    pub(crate) graph: Graph,
    pub(crate) start: NodeIndex,
    pub(crate) goal: NodeIndex,
    pub(crate) policy: SearchPolicy,
    pub(crate) heuristic: Box<dyn Heuristic>,
    pub(crate) states: Vec<NodeState>,
    pub(crate) frontier: Frontier,
    pub(crate) trace: SearchTrace,
}

impl GraphProblem {
    /// Bind `graph` to `start`/`goal` and reset.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation
    /// or its `unit_distance` differs from the unit the graph's derived edge
    /// costs were computed with, and [`SearchError::UnknownNode`] if either
    /// key is not in the graph.
    pub fn new(
        graph: Graph,
        start: &str,
        goal: &str,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        if let Some(unit) = graph.unit_distance() {
            if unit != policy.unit_distance {
                return Err(SearchError::InvalidPolicy {
                    detail: format!(
                        "unit_distance {} does not match the graph's edge-cost unit {unit}",
                        policy.unit_distance
                    ),
                });
            }
        }
        let start_ix = resolve_in(&graph, start)?;
        let goal_ix = resolve_in(&graph, goal)?;
        let heuristic = default_heuristic(&policy);
        let header = TraceHeader {
            start: start.to_string(),
            goal: goal.to_string(),
            strategy: policy.strategy,
            solved_when: policy.solved_when,
            heuristic: heuristic.name().to_string(),
        };
        let mut problem = Self {
            states: vec![NodeState::pristine(); graph.len()],
            frontier: Frontier::seeded(start_ix),
            trace: SearchTrace::new(header),
            graph,
            start: start_ix,
            goal: goal_ix,
            policy,
            heuristic,
        };
        problem.reset();
        Ok(problem)
    }

    /// Replace the heuristic and reset.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self.reset();
        self
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Return to the pristine state: frontier `[start]`, nothing explored,
    /// every node's scores zeroed and unparented, the start classified
    /// `Next`, trace emptied.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            *state = NodeState::pristine();
        }
        self.states[self.start.get()] = NodeState::start();
        self.frontier.reset(self.start);
        let header = self.trace_header();
        self.trace.restart(header);
    }

    /// Rebind start and goal, then reset.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] (and changes nothing) if either
    /// key is not in the graph.
    pub fn retarget(&mut self, start: &str, goal: &str) -> Result<(), SearchError> {
        let start_ix = self.resolve(start)?;
        let goal_ix = self.resolve(goal)?;
        self.start = start_ix;
        self.goal = goal_ix;
        tracing::debug!(start, goal, "problem retargeted");
        self.reset();
        Ok(())
    }

    fn trace_header(&self) -> TraceHeader {
        TraceHeader {
            start: self.graph.key(self.start).to_string(),
            goal: self.graph.key(self.goal).to_string(),
            strategy: self.policy.strategy,
            solved_when: self.policy.solved_when,
            heuristic: self.heuristic.name().to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Cost model
    // -----------------------------------------------------------------------

    /// Whether `key` is the goal. Unknown keys are never the goal.
    #[must_use]
    pub fn is_goal(&self, key: &str) -> bool {
        self.graph.index_of(key) == Some(self.goal)
    }

    /// g-component: cost of the edge joining `a` and `b` (either direction),
    /// or [`pathlab_kernel::graph::INFINITE_COST`] if they are not adjacent.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn distance(&self, a: &str, b: &str) -> Result<Cost, SearchError> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        Ok(self.graph.edge_cost(a, b))
    }

    /// h-component: heuristic estimate from `key` to the configured goal.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn estimate(&self, key: &str) -> Result<Cost, SearchError> {
        let ix = self.resolve(key)?;
        Ok(self.heuristic.estimate(&self.graph, ix, self.goal))
    }

    /// Heuristic estimate from `key` to an arbitrary `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn estimate_to(&self, key: &str, goal: &str) -> Result<Cost, SearchError> {
        let ix = self.resolve(key)?;
        let goal = self.resolve(goal)?;
        Ok(self.heuristic.estimate(&self.graph, ix, goal))
    }

    /// Nodes adjacent to `key`, in edge-declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn successors(&self, key: &str) -> Result<Vec<&Node>, SearchError> {
        let ix = self.resolve(key)?;
        Ok(self.graph.neighbors(ix).map(|n| self.graph.node(n)).collect())
    }

    // -----------------------------------------------------------------------
    // Progress queries
    // -----------------------------------------------------------------------

    /// Whether the run has reached its goal, under the policy's trigger.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match self.policy.solved_when {
            SolvedWhen::GoalAtFrontierHead => self.frontier.head() == Some(self.goal),
            SolvedWhen::GoalExplored => self.frontier.is_explored(self.goal),
        }
    }

    /// At least one expansion happened and the goal is not reached yet.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        !self.frontier.explored().is_empty() && !self.is_solved()
    }

    /// Whether the run ended without a solution (frontier exhausted).
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty() && !self.is_solved()
    }

    #[must_use]
    pub fn is_explored_node(&self, key: &str) -> bool {
        self.graph
            .index_of(key)
            .is_some_and(|ix| self.frontier.is_explored(ix))
    }

    #[must_use]
    pub fn is_queued_node(&self, key: &str) -> bool {
        self.graph
            .index_of(key)
            .is_some_and(|ix| self.frontier.is_queued(ix))
    }

    // -----------------------------------------------------------------------
    // Bookkeeping mutators
    // -----------------------------------------------------------------------

    /// Queue `key`. Returns `false` if it was already queued or explored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn add_to_frontier(&mut self, key: &str) -> Result<bool, SearchError> {
        let ix = self.resolve(key)?;
        Ok(self.queue_index(ix))
    }

    /// Drop `key` from the frontier. Returns whether it was queued.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn remove_from_frontier(&mut self, key: &str) -> Result<bool, SearchError> {
        let ix = self.resolve(key)?;
        let removed = self.frontier.remove(ix);
        if removed {
            self.states[ix.get()].classification = Classification::Unexplored;
            self.refresh_frontier_classes();
        }
        Ok(removed)
    }

    /// Mark `key` explored (dropping it from the frontier). Returns `false`
    /// if it was already explored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn add_to_explored(&mut self, key: &str) -> Result<bool, SearchError> {
        let ix = self.resolve(key)?;
        let added = self.explore_index(ix);
        self.refresh_frontier_classes();
        Ok(added)
    }

    pub(crate) fn queue_index(&mut self, ix: NodeIndex) -> bool {
        let inserted = self.frontier.push(ix);
        if inserted {
            self.states[ix.get()].classification = if self.frontier.len() == 1 {
                Classification::Next
            } else {
                Classification::Frontier
            };
        }
        inserted
    }

    pub(crate) fn explore_index(&mut self, ix: NodeIndex) -> bool {
        let added = self.frontier.mark_explored(ix);
        self.states[ix.get()].classification = Classification::Explored;
        added
    }

    /// Re-derive classifications of frontier members: head `Next`, rest
    /// `Frontier`.
    pub(crate) fn refresh_frontier_classes(&mut self) {
        for (i, ix) in self.frontier.queue().iter().enumerate() {
            self.states[ix.get()].classification = if i == 0 {
                Classification::Next
            } else {
                Classification::Frontier
            };
        }
    }

    // -----------------------------------------------------------------------
    // Paths
    // -----------------------------------------------------------------------

    /// Walk parent links from `key` back to a parentless node and return the
    /// keys in start → `key` order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn path_to(&self, key: &str) -> Result<Vec<String>, SearchError> {
        let ix = self.resolve(key)?;
        Ok(self
            .path_indices(ix)
            .into_iter()
            .map(|n| self.graph.key(n).to_string())
            .collect())
    }

    /// Path to the frontier head (the node about to be expanded); empty
    /// when the frontier is empty.
    #[must_use]
    pub fn current_path(&self) -> Vec<String> {
        self.frontier.head().map_or_else(Vec::new, |head| {
            self.path_indices(head)
                .into_iter()
                .map(|n| self.graph.key(n).to_string())
                .collect()
        })
    }

    /// The path a renderer should highlight: start to goal once solved,
    /// otherwise [`GraphProblem::current_path`].
    ///
    /// Under [`SolvedWhen::GoalExplored`] the goal has already left the
    /// frontier when the search is solved, so the head path would be wrong.
    #[must_use]
    pub fn solution_path(&self) -> Vec<String> {
        if !self.is_solved() {
            return self.current_path();
        }
        self.path_indices(self.goal)
            .into_iter()
            .map(|n| self.graph.key(n).to_string())
            .collect()
    }

    pub(crate) fn path_indices(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        let mut path = vec![ix];
        let mut current = ix;
        // A parent chain visits each node at most once.
        while let Some(parent) = self.states[current.get()].parent {
            if path.len() > self.graph.len() {
                break;
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    #[must_use]
    pub fn heuristic(&self) -> &dyn Heuristic {
        self.heuristic.as_ref()
    }

    #[must_use]
    pub fn start_key(&self) -> &str {
        self.graph.key(self.start)
    }

    #[must_use]
    pub fn goal_key(&self) -> &str {
        self.graph.key(self.goal)
    }

    /// Frontier keys in priority order.
    #[must_use]
    pub fn frontier(&self) -> Vec<&str> {
        self.keys(self.frontier.queue())
    }

    /// Explored keys in expansion order.
    #[must_use]
    pub fn explored(&self) -> Vec<&str> {
        self.keys(self.frontier.explored())
    }

    /// The node that would be expanded next.
    #[must_use]
    pub fn frontier_head(&self) -> Option<&str> {
        self.frontier.head().map(|ix| self.graph.key(ix))
    }

    /// Largest frontier size since the last reset.
    #[must_use]
    pub fn frontier_high_water(&self) -> usize {
        self.frontier.high_water()
    }

    /// Search state of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] for an unknown key.
    pub fn node_state(&self, key: &str) -> Result<&NodeState, SearchError> {
        let ix = self.resolve(key)?;
        Ok(&self.states[ix.get()])
    }

    /// Search state by index, for callers iterating the graph.
    #[must_use]
    pub fn state_at(&self, ix: NodeIndex) -> &NodeState {
        &self.states[ix.get()]
    }

    #[must_use]
    pub fn trace(&self) -> &SearchTrace {
        &self.trace
    }

    pub(crate) fn resolve(&self, key: &str) -> Result<NodeIndex, SearchError> {
        resolve_in(&self.graph, key)
    }

    fn keys(&self, ixs: &[NodeIndex]) -> Vec<&str> {
        ixs.iter().map(|&ix| self.graph.key(ix)).collect()
    }
}

fn resolve_in(graph: &Graph, key: &str) -> Result<NodeIndex, SearchError> {
    graph.index_of(key).ok_or_else(|| SearchError::UnknownNode {
        key: key.to_string(),
    })
}
