//! Read-only render view of a problem after any step.
//!
//! A snapshot copies out everything a renderer needs (classification, scores,
//! parent, whether a node lies on the current path) so the problem can keep
//! advancing while the snapshot is drawn.

use std::collections::BTreeSet;

use pathlab_kernel::graph::Cost;
use pathlab_kernel::proof::canon::canonical_json_bytes;
use pathlab_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;
use crate::node::Classification;
use crate::problem::GraphProblem;

/// Per-node view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub key: String,
    pub x: i32,
    pub y: i32,
    pub classification: Classification,
    pub cost_so_far: Cost,
    pub estimated_cost: Cost,
    pub total_cost: Cost,
    pub depth: u32,
    pub parent: Option<String>,
    /// On the path from the start to the frontier head.
    pub on_path: bool,
}

/// Frozen state of one problem at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub start: String,
    pub goal: String,
    pub frontier: Vec<String>,
    pub explored: Vec<String>,
    /// Graph declaration order.
    pub nodes: Vec<NodeView>,
    /// Start → frontier head.
    pub path: Vec<String>,
    pub solved: bool,
    /// Expansion events recorded so far in this run.
    pub expansions: u64,
}

impl SearchSnapshot {
    #[must_use]
    pub fn capture(problem: &GraphProblem) -> Self {
        let path = problem.solution_path();
        let on_path: BTreeSet<&str> = path.iter().map(String::as_str).collect();
        let graph = problem.graph();
        let nodes = graph
            .indices()
            .map(|ix| {
                let node = graph.node(ix);
                let state = problem.state_at(ix);
                NodeView {
                    key: node.key().to_string(),
                    x: node.position().x,
                    y: node.position().y,
                    classification: state.classification,
                    cost_so_far: state.cost_so_far,
                    estimated_cost: state.estimated_cost,
                    total_cost: state.total_cost,
                    depth: state.depth,
                    parent: state.parent.map(|p| graph.key(p).to_string()),
                    on_path: on_path.contains(node.key()),
                }
            })
            .collect();
        Self {
            start: problem.start_key().to_string(),
            goal: problem.goal_key().to_string(),
            frontier: owned(problem.frontier()),
            explored: owned(problem.explored()),
            nodes,
            solved: problem.is_solved(),
            expansions: problem.trace().next_order(),
            path,
        }
    }

    /// Views in a given classification, in graph order.
    #[must_use]
    pub fn with_classification(&self, class: Classification) -> Vec<&NodeView> {
        self.nodes
            .iter()
            .filter(|n| n.classification == class)
            .collect()
    }

    #[must_use]
    pub fn unexplored(&self) -> Vec<&NodeView> {
        self.with_classification(Classification::Unexplored)
    }

    /// Frontier members including the `Next` head.
    #[must_use]
    pub fn frontier_nodes(&self) -> Vec<&NodeView> {
        self.nodes
            .iter()
            .filter(|n| {
                matches!(
                    n.classification,
                    Classification::Frontier | Classification::Next
                )
            })
            .collect()
    }

    #[must_use]
    pub fn explored_nodes(&self) -> Vec<&NodeView> {
        self.with_classification(Classification::Explored)
    }

    #[must_use]
    pub fn path_nodes(&self) -> Vec<&NodeView> {
        self.path
            .iter()
            .filter_map(|k| self.nodes.iter().find(|n| &n.key == k))
            .collect()
    }

    #[must_use]
    pub fn node(&self, key: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.key == key)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let nodes: Vec<serde_json::Value> = self
            .nodes
            .iter()
            .map(|n| {
                serde_json::json!({
                    "classification": n.classification.as_str(),
                    "cost_so_far": n.cost_so_far,
                    "depth": n.depth,
                    "estimated_cost": n.estimated_cost,
                    "id": n.key,
                    "on_path": n.on_path,
                    "parent": n.parent,
                    "total_cost": n.total_cost,
                    "x": n.x,
                    "y": n.y,
                })
            })
            .collect();
        serde_json::json!({
            "expansions": self.expansions,
            "explored": self.explored,
            "frontier": self.frontier,
            "goal": self.goal,
            "nodes": nodes,
            "path": self.path,
            "solved": self.solved,
            "start": self.start,
        })
    }

    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        Ok(canonical_json_bytes(&self.to_json_value())?)
    }

    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchSnapshot, &bytes))
    }
}

fn owned(keys: Vec<&str>) -> Vec<String> {
    keys.into_iter().map(str::to_string).collect()
}
