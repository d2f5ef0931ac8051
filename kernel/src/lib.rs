//! Pathlab Kernel: immutable graph topology and the deterministic proof layer.
//!
//! # API Surface
//!
//! - [`graph::Graph`] -- nodes with 2-D positions and undirected weighted edges
//! - [`graph::decode::graph_from_json_bytes`] -- decode a graph fixture
//! - [`proof::canon::canonical_json_bytes`] -- the single JSON canonicalizer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `proof` ← `graph`
//!
//! One-way only. `graph` uses `proof` for its topology digest. `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod proof;
