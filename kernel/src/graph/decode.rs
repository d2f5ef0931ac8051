//! Graph fixture decoding.
//!
//! # Fixture format
//!
//! ```text
//! {
//!   "nodes": [{"id": "A", "x": 10, "y": 20}, ...],
//!   "edges": [["A", "B", 3], ["B", "C"], ...],
//!   "unit_distance": 32            (optional)
//! }
//! ```
//!
//! An edge without a third element has its cost derived from the node
//! positions. Deriving requires a unit: the fixture's `unit_distance`, or the
//! caller's fallback.

use super::{Cost, Graph, GraphBuilder, GraphError};

fn malformed(detail: impl Into<String>) -> GraphError {
    GraphError::Malformed {
        detail: detail.into(),
    }
}

fn as_i32(v: &serde_json::Value, what: &str) -> Result<i32, GraphError> {
    v.as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| malformed(format!("{what} must be a 32-bit integer")))
}

/// Decode a fixture value into a graph.
///
/// `fallback_unit` is used for cost-less edges when the fixture does not
/// declare `unit_distance`.
///
/// # Errors
///
/// Returns [`GraphError::Malformed`] if the JSON shape is wrong, and any
/// other [`GraphError`] raised while building the graph.
pub fn graph_from_json_value(
    value: &serde_json::Value,
    fallback_unit: Option<i64>,
) -> Result<Graph, GraphError> {
    let obj = value
        .as_object()
        .ok_or_else(|| malformed("fixture root must be an object"))?;

    let nodes = obj
        .get("nodes")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| malformed("missing \"nodes\" array"))?;
    let edges = obj
        .get("edges")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| malformed("missing \"edges\" array"))?;

    let unit = match obj.get("unit_distance") {
        None | Some(serde_json::Value::Null) => fallback_unit,
        Some(v) => Some(
            v.as_i64()
                .ok_or_else(|| malformed("\"unit_distance\" must be an integer"))?,
        ),
    };

    let mut builder = GraphBuilder::default();
    for (i, node) in nodes.iter().enumerate() {
        let id = node
            .get("id")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| malformed(format!("nodes[{i}].id must be a string")))?;
        let x = as_i32(&node["x"], &format!("nodes[{i}].x"))?;
        let y = as_i32(&node["y"], &format!("nodes[{i}].y"))?;
        builder = builder.node(id, x, y);
    }

    for (i, edge) in edges.iter().enumerate() {
        let parts = edge
            .as_array()
            .ok_or_else(|| malformed(format!("edges[{i}] must be an array")))?;
        let key_at = |j: usize| {
            parts
                .get(j)
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| malformed(format!("edges[{i}][{j}] must be a node key")))
        };
        let a = key_at(0)?;
        let b = key_at(1)?;
        builder = match parts.get(2) {
            None | Some(serde_json::Value::Null) => builder.edge_unweighted(a, b),
            Some(c) => {
                let cost: Cost = c
                    .as_i64()
                    .ok_or_else(|| malformed(format!("edges[{i}][2] must be an integer cost")))?;
                builder.edge(a, b, cost)
            }
        };
        if parts.len() > 3 {
            return Err(malformed(format!("edges[{i}] has more than 3 elements")));
        }
    }

    match unit {
        Some(u) => builder.build_weighted(u),
        None => builder.build(),
    }
}

/// Decode fixture bytes (UTF-8 JSON) into a graph.
///
/// # Errors
///
/// Returns [`GraphError::Malformed`] for invalid JSON, otherwise as
/// [`graph_from_json_value`].
pub fn graph_from_json_bytes(bytes: &[u8], fallback_unit: Option<i64>) -> Result<Graph, GraphError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| malformed(format!("invalid JSON: {e}")))?;
    graph_from_json_value(&value, fallback_unit)
}
