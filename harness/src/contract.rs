//! World contract: the minimal trait a graph world must implement.
//!
//! A world supplies topology and a default start/goal pair. It does NOT
//! search, score, or render: problems and agents belong to `pathlab_search`,
//! scrubbing belongs to [`crate::scrubber`].

use pathlab_kernel::graph::{Graph, GraphError};

/// A named graph with default endpoints.
pub trait GraphWorld {
    /// Unique world identifier (e.g., `"reference"`).
    fn world_id(&self) -> &str;

    /// Build the world's graph with costs already assigned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the world's data is inconsistent.
    fn graph(&self) -> Result<Graph, GraphError>;

    /// Start key used when the caller does not pick one.
    fn default_start(&self) -> &str;

    /// Goal key used when the caller does not pick one.
    fn default_goal(&self) -> &str;
}
