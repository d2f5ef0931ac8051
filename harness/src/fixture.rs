//! Graph worlds loaded from JSON fixture files.
//!
//! The file format is the kernel's graph fixture format plus three optional
//! top-level fields:
//!
//! ```text
//! { "id": "campus", "start": "A", "goal": "F", "nodes": [...], "edges": [...] }
//! ```
//!
//! `id` defaults to the file stem, `start` to the first declared node and
//! `goal` to the last. The fixture digest is taken over the canonical form
//! of the parsed document, so whitespace and key order do not affect it.

use std::path::Path;

use pathlab_kernel::graph::decode::graph_from_json_value;
use pathlab_kernel::graph::{Graph, GraphError};
use pathlab_kernel::proof::canon::canonical_json_hash;
use pathlab_kernel::proof::hash::{ContentHash, HashDomain};

use crate::contract::GraphWorld;

/// Error loading a fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// The file could not be read.
    Io { detail: String },
    /// The content is not a valid graph fixture.
    Decode(GraphError),
    /// The fixture declares no nodes, or names an endpoint that is not a node.
    Endpoint { detail: String },
    /// Canonical JSON serialization failed.
    Canon { detail: String },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
            Self::Endpoint { detail } => write!(f, "endpoint error: {detail}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for FixtureError {
    fn from(e: GraphError) -> Self {
        Self::Decode(e)
    }
}

/// A world read from disk.
#[derive(Debug, Clone)]
pub struct FixtureWorld {
    id: String,
    graph: Graph,
    start: String,
    goal: String,
    digest: ContentHash,
}

impl FixtureWorld {
    /// Content digest of the canonicalized fixture document.
    #[must_use]
    pub fn digest(&self) -> &ContentHash {
        &self.digest
    }
}

impl GraphWorld for FixtureWorld {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn graph(&self) -> Result<Graph, GraphError> {
        Ok(self.graph.clone())
    }

    fn default_start(&self) -> &str {
        &self.start
    }

    fn default_goal(&self) -> &str {
        &self.goal
    }
}

/// Decode a fixture document already in memory. `default_id` names the
/// world when the document has no `id`.
///
/// # Errors
///
/// Returns [`FixtureError`] for malformed JSON, invalid graphs, or endpoints
/// that are not nodes.
pub fn world_from_bytes(
    bytes: &[u8],
    default_id: &str,
    fallback_unit: Option<i64>,
) -> Result<FixtureWorld, FixtureError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| GraphError::Malformed {
            detail: format!("invalid JSON: {e}"),
        })?;
    let graph = graph_from_json_value(&value, fallback_unit)?;

    let text_field = |name: &str| -> Result<Option<String>, FixtureError> {
        match value.get(name) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(FixtureError::Decode(GraphError::Malformed {
                detail: format!("\"{name}\" must be a string"),
            })),
        }
    };
    let id = text_field("id")?.unwrap_or_else(|| default_id.to_string());

    let (first, last) = match (graph.nodes().first(), graph.nodes().last()) {
        (Some(f), Some(l)) => (f.key().to_string(), l.key().to_string()),
        _ => {
            return Err(FixtureError::Endpoint {
                detail: "fixture declares no nodes".into(),
            })
        }
    };
    let start = text_field("start")?.unwrap_or(first);
    let goal = text_field("goal")?.unwrap_or(last);
    for key in [&start, &goal] {
        if graph.index_of(key).is_none() {
            return Err(FixtureError::Endpoint {
                detail: format!("{key:?} is not a node"),
            });
        }
    }

    let digest = canonical_json_hash(HashDomain::FixtureFile, &value).map_err(|e| {
        FixtureError::Canon {
            detail: e.to_string(),
        }
    })?;

    tracing::debug!(world = %id, nodes = graph.len(), edges = graph.edges().len(), %digest, "fixture decoded");
    Ok(FixtureWorld {
        id,
        graph,
        start,
        goal,
        digest,
    })
}

/// Read and decode a fixture file.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be read, otherwise as
/// [`world_from_bytes`].
pub fn load_graph_file(path: &Path, fallback_unit: Option<i64>) -> Result<FixtureWorld, FixtureError> {
    let bytes = std::fs::read(path).map_err(|e| FixtureError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("fixture");
    world_from_bytes(&bytes, stem, fallback_unit)
}
