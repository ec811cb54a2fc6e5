//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camera3d` – scene camera used for rendering and picking
//! - `debugmode` – presence toggles the debug overlay
//! - `dispenser` – the dispense animator state machine
//! - `emojimeshes` – per-emoji back-references to dispensable entities
//! - `emojitextures` – result images keyed by emoji
//! - `gameconfig` – settings loaded from the INI file
//! - `input` – per-frame keyboard shortcuts and pointer target
//! - `interaction` – selection controller state
//! - `modal` – result modal state and layout
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera3d;
pub mod debugmode;
pub mod dispenser;
pub mod emojimeshes;
pub mod emojitextures;
pub mod gameconfig;
pub mod input;
pub mod interaction;
pub mod modal;
pub mod worldtime;
