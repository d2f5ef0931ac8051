//! Built-in graph worlds.

pub mod disconnected;
pub mod reference;
pub mod triangle;

use crate::contract::GraphWorld;

/// Every built-in world, in a fixed order.
#[must_use]
pub fn builtin_worlds() -> Vec<Box<dyn GraphWorld>> {
    vec![
        Box::new(reference::Reference),
        Box::new(triangle::Triangle),
        Box::new(disconnected::Disconnected),
    ]
}

/// Look up a built-in world by id.
#[must_use]
pub fn builtin_world(id: &str) -> Option<Box<dyn GraphWorld>> {
    builtin_worlds().into_iter().find(|w| w.world_id() == id)
}
