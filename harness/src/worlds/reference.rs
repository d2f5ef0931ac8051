//! `Reference`: fifteen nodes `A`..`O` on a 600x350 canvas.
//!
//! Edge costs are derived from positions with the default 32-pixel unit, the
//! same unit the straight-line heuristic uses. Start `A` sits on the left
//! edge, goal `O` on the right.

use pathlab_kernel::graph::geometry::DEFAULT_UNIT_DISTANCE;
use pathlab_kernel::graph::{Graph, GraphError};

use crate::contract::GraphWorld;

/// Canvas size the coordinates were laid out for.
pub const CANVAS_WIDTH: i32 = 600;
pub const CANVAS_HEIGHT: i32 = 350;

const NODES: &[(&str, i32, i32)] = &[
    ("A", 50, 175),
    ("B", 120, 60),
    ("C", 130, 290),
    ("D", 200, 170),
    ("E", 250, 40),
    ("F", 270, 300),
    ("G", 320, 160),
    ("H", 380, 60),
    ("I", 390, 250),
    ("J", 450, 140),
    ("K", 460, 320),
    ("L", 500, 40),
    ("M", 520, 240),
    ("N", 560, 90),
    ("O", 550, 175),
];

const EDGES: &[(&str, &str)] = &[
    ("A", "B"),
    ("A", "C"),
    ("A", "D"),
    ("B", "D"),
    ("B", "E"),
    ("C", "D"),
    ("C", "F"),
    ("D", "G"),
    ("E", "G"),
    ("E", "H"),
    ("F", "G"),
    ("F", "I"),
    ("G", "H"),
    ("G", "I"),
    ("G", "J"),
    ("H", "J"),
    ("H", "L"),
    ("I", "J"),
    ("I", "K"),
    ("I", "M"),
    ("J", "M"),
    ("J", "N"),
    ("K", "M"),
    ("L", "N"),
    ("M", "O"),
    ("N", "O"),
];

pub struct Reference;

impl GraphWorld for Reference {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "reference"
    }

    fn graph(&self) -> Result<Graph, GraphError> {
        let mut builder = Graph::builder();
        for &(key, x, y) in NODES {
            builder = builder.node(key, x, y);
        }
        for &(a, b) in EDGES {
            builder = builder.edge_unweighted(a, b);
        }
        builder.build_weighted(DEFAULT_UNIT_DISTANCE)
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn default_start(&self) -> &str {
        "A"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn default_goal(&self) -> &str {
        "O"
    }
}
