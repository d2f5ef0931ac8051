//! Pathlab Search: stepwise, replayable best-first graph search (A* and kin).
//!
//! This crate provides the search layer. It depends only on `pathlab_kernel`;
//! it does NOT depend on `pathlab_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathlab_kernel  ←  pathlab_search  ←  pathlab_harness
//! (graph, proof)     (problem, agent)    (scrubber, worlds, fixtures)
//! ```
//!
//! # Key types
//!
//! - [`GraphProblem`] -- graph + per-run search state + frontier/explored bookkeeping
//! - [`Agent`] -- advances a problem one expansion at a time, or to completion
//! - [`SearchPolicy`] -- strategy, solved-trigger and unit-distance configuration
//! - [`Heuristic`] -- pluggable h(n)
//! - [`SearchTrace`] -- expansion audit log with canonical JSON and digests
//! - [`SearchSnapshot`] -- read-only render view after any step
//!
//! # Driving a search
//!
//! ```
//! use pathlab_kernel::graph::Graph;
//! use pathlab_search::{Agent, GraphProblem, SearchPolicy};
//!
//! let graph = Graph::builder()
//!     .node("A", 0, 0)
//!     .node("B", 0, 0)
//!     .node("C", 0, 0)
//!     .edge("A", "B", 1)
//!     .edge("B", "C", 1)
//!     .edge("A", "C", 5)
//!     .build()
//!     .unwrap();
//! let mut problem = GraphProblem::new(graph, "A", "C", SearchPolicy::default()).unwrap();
//! let steps = Agent::new(&mut problem).solve(None).unwrap();
//! assert!(problem.is_solved());
//! assert_eq!(steps, 2);
//! assert_eq!(problem.path_to("C").unwrap(), ["A", "B", "C"]);
//! ```

#![forbid(unsafe_code)]

pub mod agent;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod problem;
pub mod snapshot;
pub mod trace;

pub use agent::{Agent, ExpandOutcome};
pub use contract::Heuristic;
pub use error::SearchError;
pub use policy::{SearchPolicy, SolvedWhen, Strategy};
pub use problem::GraphProblem;
pub use snapshot::SearchSnapshot;
pub use trace::SearchTrace;
