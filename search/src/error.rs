//! Typed search errors.
//!
//! `SearchError` covers caller mistakes only: unknown keys and invalid
//! configuration. Search outcomes such as "goal unreachable" are not errors;
//! they are observable as an empty frontier with `is_solved() == false`.

use pathlab_kernel::graph::GraphError;
use pathlab_kernel::proof::canon::CanonError;

/// Typed failure for problem construction and agent operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A node key is not present in the problem's graph.
    UnknownNode { key: String },
    /// A policy field is out of range.
    InvalidPolicy { detail: String },
    /// Graph construction or reweighting failed.
    Graph(GraphError),
    /// Canonical serialization of a trace or snapshot failed.
    Canon { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode { key } => write!(f, "unknown node {key:?}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::Graph(e) => write!(f, "graph error: {e}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl From<CanonError> for SearchError {
    fn from(e: CanonError) -> Self {
        Self::Canon {
            detail: e.to_string(),
        }
    }
}
