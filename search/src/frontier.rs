//! Frontier (open list) and explored set (closed list).
//!
//! The frontier is a plain `Vec` re-sorted with a stable sort after every
//! expansion: graphs here have tens of nodes, and the stable sort is what
//! gives encounter-order tie-breaking for free. Membership is mirrored in
//! `BTreeSet`s (not `HashSet`) so iteration stays deterministic.
//!
//! Invariants held by construction:
//! - no index appears twice in the frontier;
//! - no index is in both the frontier and the explored set.

use std::collections::BTreeSet;

use pathlab_kernel::graph::{Cost, NodeIndex};

/// Ordered frontier plus insertion-ordered explored set.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: Vec<NodeIndex>,
    queued: BTreeSet<NodeIndex>,
    explored: Vec<NodeIndex>,
    explored_set: BTreeSet<NodeIndex>,
    high_water: usize,
}

impl Frontier {
    /// A frontier seeded with `start` and an empty explored set.
    #[must_use]
    pub fn seeded(start: NodeIndex) -> Self {
        let mut f = Self::default();
        f.reset(start);
        f
    }

    /// Clear both lists and re-seed the frontier with `start`.
    pub fn reset(&mut self, start: NodeIndex) {
        self.queue.clear();
        self.queued.clear();
        self.explored.clear();
        self.explored_set.clear();
        self.high_water = 0;
        self.push(start);
    }

    /// Append `ix` to the frontier.
    ///
    /// Returns `false` (and changes nothing) if `ix` is already queued or
    /// already explored.
    pub fn push(&mut self, ix: NodeIndex) -> bool {
        if self.explored_set.contains(&ix) || !self.queued.insert(ix) {
            return false;
        }
        self.queue.push(ix);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Remove `ix` from the frontier. Returns whether it was queued.
    pub fn remove(&mut self, ix: NodeIndex) -> bool {
        if !self.queued.remove(&ix) {
            return false;
        }
        self.queue.retain(|&q| q != ix);
        true
    }

    /// Move `ix` into the explored set, dropping it from the frontier.
    ///
    /// Returns `false` if it was already explored.
    pub fn mark_explored(&mut self, ix: NodeIndex) -> bool {
        self.remove(ix);
        if !self.explored_set.insert(ix) {
            return false;
        }
        self.explored.push(ix);
        true
    }

    /// Stable sort of the frontier ascending by `key`.
    pub fn sort_by_cost(&mut self, key: impl Fn(NodeIndex) -> Cost) {
        self.queue.sort_by_key(|&ix| key(ix));
    }

    /// Best node (index 0), if any.
    #[must_use]
    pub fn head(&self) -> Option<NodeIndex> {
        self.queue.first().copied()
    }

    #[must_use]
    pub fn is_queued(&self, ix: NodeIndex) -> bool {
        self.queued.contains(&ix)
    }

    #[must_use]
    pub fn is_explored(&self, ix: NodeIndex) -> bool {
        self.explored_set.contains(&ix)
    }

    /// Frontier in priority order.
    #[must_use]
    pub fn queue(&self) -> &[NodeIndex] {
        &self.queue
    }

    /// Explored nodes in expansion order.
    #[must_use]
    pub fn explored(&self) -> &[NodeIndex] {
        &self.explored
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest frontier size seen since the last reset.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
