//! Pluggable heuristic contract.

use pathlab_kernel::graph::{Cost, Graph, NodeIndex};

/// Heuristic estimate `h(n)` of the remaining cost from a node to a goal.
///
/// # Contract
///
/// - Must be non-negative.
/// - Must be deterministic: same `(graph, from, goal)` → same estimate.
/// - For A* to return optimal paths the estimate must be admissible (never
///   exceed the true remaining cost). Implementations derived from node
///   positions must use the same unit as the graph's edge costs.
pub trait Heuristic: Send + Sync + std::fmt::Debug {
    /// Short stable name recorded in traces (e.g. `"euclidean"`).
    fn name(&self) -> &str;

    /// Estimate the cost from `from` to `goal`.
    fn estimate(&self, graph: &Graph, from: NodeIndex, goal: NodeIndex) -> Cost;
}
