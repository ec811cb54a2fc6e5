//! ECS components for entities.
//!
//! Submodules overview:
//! - [`alarm`] – one-shot countdown that rings once and despawns
//! - [`button`] – front-panel buttons and their identifiers
//! - [`emoji`] – the emoji set, their dispense data and piece markers
//! - [`meshshape`] – primitive shapes the renderer draws
//! - [`worldposition`] – model-space 3D position

pub mod alarm;
pub mod button;
pub mod emoji;
pub mod meshshape;
pub mod worldposition;
