//! Immutable graph topology: keyed nodes with 2-D positions and undirected,
//! non-negatively weighted edges.
//!
//! A [`Graph`] is built once (via [`GraphBuilder`] or
//! [`decode::graph_from_json_bytes`]) and never mutated afterwards. Search
//! state lives elsewhere; this module only answers topology questions.
//!
//! Adjacency is kept per node in edge-declaration order, so successor
//! enumeration and first-match edge lookup are both deterministic.

pub mod decode;
pub mod geometry;

use std::collections::BTreeMap;

use crate::proof::canon::{canonical_json_hash, CanonError};
use crate::proof::hash::{ContentHash, HashDomain};

use geometry::{is_same_pair, scaled_distance, Point};

/// Integer path cost. All costs in a graph are non-negative.
pub type Cost = i64;

/// Sentinel cost for "no edge": strictly greater than every finite cost.
///
/// Arithmetic on costs must saturate so that `INFINITE_COST + g` stays
/// infinite instead of wrapping.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Dense index of a node inside the [`Graph`] that produced it.
///
/// Indices are only meaningful for the graph they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Position of the node in [`Graph::nodes`].
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

/// A graph vertex: unique key plus position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: String,
    position: Point,
}

impl Node {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }
}

/// An undirected weighted edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    a: NodeIndex,
    b: NodeIndex,
    cost: Cost,
    /// Cost came from the endpoint positions rather than the declaration.
    derived: bool,
}

impl Edge {
    /// Endpoints in declaration order.
    #[must_use]
    pub fn endpoints(&self) -> (NodeIndex, NodeIndex) {
        (self.a, self.b)
    }

    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Whether the cost was derived from node positions.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.derived
    }

    /// Whether this edge joins `x` and `y` in either direction.
    #[must_use]
    pub fn connects(&self, x: NodeIndex, y: NodeIndex) -> bool {
        is_same_pair(&self.a, &self.b, &x, &y)
    }

    /// The endpoint opposite `from`, or `None` if `from` is not an endpoint.
    #[must_use]
    pub fn opposite(&self, from: NodeIndex) -> Option<NodeIndex> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Typed failure for graph construction and fixture decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes were declared with the same key.
    DuplicateNode { key: String },
    /// An edge references a key that was never declared as a node.
    UnknownEndpoint { key: String },
    /// An edge joins a node to itself.
    SelfLoop { key: String },
    /// An edge carries a negative cost.
    NegativeCost { a: String, b: String, cost: Cost },
    /// An edge has no cost and no unit was supplied to derive one.
    MissingCost { a: String, b: String },
    /// The unit distance used to derive costs was not positive.
    InvalidUnit { unit: i64 },
    /// Fixture JSON does not have the expected shape.
    Malformed { detail: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateNode { key } => write!(f, "duplicate node key {key:?}"),
            Self::UnknownEndpoint { key } => write!(f, "edge endpoint {key:?} is not a node"),
            Self::SelfLoop { key } => write!(f, "self-loop on node {key:?}"),
            Self::NegativeCost { a, b, cost } => {
                write!(f, "edge {a:?}-{b:?} has negative cost {cost}")
            }
            Self::MissingCost { a, b } => write!(f, "edge {a:?}-{b:?} has no cost"),
            Self::InvalidUnit { unit } => write!(f, "unit distance must be positive, got {unit}"),
            Self::Malformed { detail } => write!(f, "malformed graph fixture: {detail}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Immutable topology shared by every search run over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    keys: BTreeMap<String, NodeIndex>,
    edges: Vec<Edge>,
    /// Per node: indices into `edges`, in declaration order.
    adjacency: Vec<Vec<usize>>,
    /// Divisor behind every derived edge cost; `None` when no cost is derived.
    unit_distance: Option<i64>,
}

impl Graph {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The unit that derived edge costs were computed with, or `None` if
    /// every cost was declared explicitly.
    ///
    /// A straight-line heuristic over this graph stays admissible only when
    /// it divides by the same unit.
    #[must_use]
    pub fn unit_distance(&self) -> Option<i64> {
        self.unit_distance
    }

    /// Look up a node index by key.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.keys.get(key).copied()
    }

    /// Node at `ix`.
    ///
    /// # Panics
    ///
    /// Panics if `ix` came from a different, larger graph.
    #[must_use]
    pub fn node(&self, ix: NodeIndex) -> &Node {
        &self.nodes[ix.0]
    }

    /// Key of the node at `ix`.
    #[must_use]
    pub fn key(&self, ix: NodeIndex) -> &str {
        self.node(ix).key()
    }

    /// All node indices in declaration order.
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len()).map(NodeIndex)
    }

    /// First declared edge joining `a` and `b` in either direction.
    #[must_use]
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&Edge> {
        self.adjacency
            .get(a.0)?
            .iter()
            .map(|&e| &self.edges[e])
            .find(|e| e.connects(a, b))
    }

    /// Cost of the edge joining `a` and `b`, or [`INFINITE_COST`] if none.
    #[must_use]
    pub fn edge_cost(&self, a: NodeIndex, b: NodeIndex) -> Cost {
        self.edge_between(a, b).map_or(INFINITE_COST, Edge::cost)
    }

    /// Nodes adjacent to `ix`, in edge-declaration order.
    ///
    /// A neighbor joined by several parallel edges is yielded once per edge.
    pub fn neighbors(&self, ix: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adjacency
            .get(ix.0)
            .into_iter()
            .flatten()
            .filter_map(move |&e| self.edges[e].opposite(ix))
    }

    /// A copy of this graph with every edge cost recomputed from the
    /// endpoint positions as `round(distance / unit)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidUnit`] if `unit <= 0`.
    pub fn reweighted(&self, unit: i64) -> Result<Self, GraphError> {
        if unit <= 0 {
            return Err(GraphError::InvalidUnit { unit });
        }
        let mut out = self.clone();
        for edge in &mut out.edges {
            let pa = self.nodes[edge.a.0].position;
            let pb = self.nodes[edge.b.0].position;
            edge.cost = scaled_distance(pa, pb, unit);
            edge.derived = true;
        }
        out.unit_distance = (!out.edges.is_empty()).then_some(unit);
        Ok(out)
    }

    /// A copy of this graph with only the derived edge costs recomputed
    /// under `unit`. Explicit costs are kept. A graph without derived costs
    /// comes back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidUnit`] if `unit <= 0`.
    pub fn with_unit_distance(&self, unit: i64) -> Result<Self, GraphError> {
        if unit <= 0 {
            return Err(GraphError::InvalidUnit { unit });
        }
        if self.unit_distance.is_none() || self.unit_distance == Some(unit) {
            return Ok(self.clone());
        }
        let mut out = self.clone();
        for edge in out.edges.iter_mut().filter(|e| e.derived) {
            let pa = self.nodes[edge.a.0].position;
            let pb = self.nodes[edge.b.0].position;
            edge.cost = scaled_distance(pa, pb, unit);
        }
        out.unit_distance = Some(unit);
        Ok(out)
    }

    /// Canonical JSON form (same shape as the fixture format).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let nodes: Vec<serde_json::Value> = self
            .nodes
            .iter()
            .map(|n| {
                serde_json::json!({
                    "id": n.key,
                    "x": n.position.x,
                    "y": n.position.y,
                })
            })
            .collect();
        let edges: Vec<serde_json::Value> = self
            .edges
            .iter()
            .map(|e| serde_json::json!([self.key(e.a), self.key(e.b), e.cost]))
            .collect();
        serde_json::json!({ "edges": edges, "nodes": nodes })
    }

    /// Content digest of the topology.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails (it cannot for a
    /// well-formed graph, since every number is an integer).
    pub fn topology_digest(&self) -> Result<ContentHash, CanonError> {
        canonical_json_hash(HashDomain::GraphTopology, &self.to_json_value())
    }
}

/// Incremental graph construction with validation deferred to `build`.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<(String, Point)>,
    edges: Vec<(String, String, Option<Cost>)>,
}

impl GraphBuilder {
    /// Declare a node.
    #[must_use]
    pub fn node(mut self, key: impl Into<String>, x: i32, y: i32) -> Self {
        self.nodes.push((key.into(), Point::new(x, y)));
        self
    }

    /// Declare an edge with an explicit cost.
    #[must_use]
    pub fn edge(mut self, a: impl Into<String>, b: impl Into<String>, cost: Cost) -> Self {
        self.edges.push((a.into(), b.into(), Some(cost)));
        self
    }

    /// Declare an edge whose cost will be derived from node positions.
    #[must_use]
    pub fn edge_unweighted(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edges.push((a.into(), b.into(), None));
        self
    }

    /// Validate and freeze. Every edge must carry an explicit cost.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] for duplicate keys, unknown endpoints,
    /// self-loops, negative costs, or a missing cost.
    pub fn build(self) -> Result<Graph, GraphError> {
        self.assemble(None)
    }

    /// Validate and freeze, deriving missing costs as
    /// `round(distance / unit)`. Explicit costs are kept.
    ///
    /// # Errors
    ///
    /// As [`GraphBuilder::build`], plus [`GraphError::InvalidUnit`].
    pub fn build_weighted(self, unit: i64) -> Result<Graph, GraphError> {
        if unit <= 0 {
            return Err(GraphError::InvalidUnit { unit });
        }
        self.assemble(Some(unit))
    }

    fn assemble(self, unit: Option<i64>) -> Result<Graph, GraphError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut keys = BTreeMap::new();
        for (key, position) in self.nodes {
            if keys.contains_key(&key) {
                return Err(GraphError::DuplicateNode { key });
            }
            keys.insert(key.clone(), NodeIndex(nodes.len()));
            nodes.push(Node { key, position });
        }

        let lookup = |key: &str| {
            keys.get(key)
                .copied()
                .ok_or_else(|| GraphError::UnknownEndpoint {
                    key: key.to_string(),
                })
        };

        let mut edges = Vec::with_capacity(self.edges.len());
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for (ka, kb, cost) in self.edges {
            let a = lookup(&ka)?;
            let b = lookup(&kb)?;
            if a == b {
                return Err(GraphError::SelfLoop { key: ka });
            }
            let derived = cost.is_none();
            let cost = match (cost, unit) {
                (Some(c), _) => c,
                (None, Some(u)) => scaled_distance(nodes[a.0].position, nodes[b.0].position, u),
                (None, None) => return Err(GraphError::MissingCost { a: ka, b: kb }),
            };
            if cost < 0 {
                return Err(GraphError::NegativeCost {
                    a: ka,
                    b: kb,
                    cost,
                });
            }
            adjacency[a.0].push(edges.len());
            adjacency[b.0].push(edges.len());
            edges.push(Edge {
                a,
                b,
                cost,
                derived,
            });
        }

        let unit_distance = unit.filter(|_| edges.iter().any(|e| e.derived));
        Ok(Graph {
            nodes,
            keys,
            edges,
            adjacency,
            unit_distance,
        })
    }
}
