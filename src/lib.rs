//! Emoji vending machine library.
//!
//! Exposes the machine's ECS components, events, resources and systems for
//! the binary and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
