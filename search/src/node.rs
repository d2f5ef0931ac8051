//! Per-node search state, kept apart from the immutable topology.
//!
//! A problem owns one [`NodeState`] per graph node, indexed by
//! [`NodeIndex`]. Reset rewrites the whole arena, so no state survives from
//! one run into the next.

use pathlab_kernel::graph::{Cost, NodeIndex};

/// Display classification consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Never reached in this run.
    Unexplored,
    /// Queued, not at the head.
    Frontier,
    /// Frontier head: the node the agent will expand next.
    Next,
    /// Expanded.
    Explored,
}

impl Classification {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unexplored => "unexplored",
            Self::Frontier => "frontier",
            Self::Next => "next",
            Self::Explored => "explored",
        }
    }
}

/// Mutable search attributes of one node.
///
/// `scored` distinguishes "g committed as 0" (the start node) from "never
/// relaxed". An unscored node behaves as if its g were infinite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeState {
    /// g: best path cost from the start found so far.
    pub cost_so_far: Cost,
    /// h: heuristic estimate to the goal.
    pub estimated_cost: Cost,
    /// f: frontier ordering key (g + h under A*).
    pub total_cost: Cost,
    /// Hop count from the start along the parent chain.
    pub depth: u32,
    /// Predecessor on the best known path (`None` for the start or unreached).
    pub parent: Option<NodeIndex>,
    pub classification: Classification,
    pub scored: bool,
}

impl NodeState {
    /// State of a node at the beginning of a run.
    #[must_use]
    pub fn pristine() -> Self {
        Self {
            cost_so_far: 0,
            estimated_cost: 0,
            total_cost: 0,
            depth: 0,
            parent: None,
            classification: Classification::Unexplored,
            scored: false,
        }
    }

    /// State of the start node at the beginning of a run.
    #[must_use]
    pub fn start() -> Self {
        Self {
            classification: Classification::Next,
            scored: true,
            ..Self::pristine()
        }
    }

    /// Whether `tentative` would improve this node's committed g.
    #[must_use]
    pub fn improves(&self, tentative: Cost) -> bool {
        !self.scored || tentative < self.cost_so_far
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::pristine()
    }
}

/// The frontier ordering key recorded when a node is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKey {
    pub total_cost: Cost,
    pub depth: u32,
}

impl From<&NodeState> for FrontierPopKey {
    fn from(state: &NodeState) -> Self {
        Self {
            total_cost: state.total_cost,
            depth: state.depth,
        }
    }
}
