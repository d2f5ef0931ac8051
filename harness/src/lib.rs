//! Pathlab Harness: hosts for driving searches outside a renderer.
//!
//! The harness binds worlds (named graphs with default endpoints) to search
//! problems and exposes a scrubber that can jump to any step of a run.
//!
//! The harness does NOT implement search logic. It delegates to
//! `pathlab_search`; worlds provide graph data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod fixture;
pub mod scrubber;
pub mod worlds;
