//! Machine systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation, read input and render.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread and the [`audio::Sfx`] param
//! - [`dispense`] – L-path fall, settle alarm, completion and reset
//! - [`gameconfig`] – apply window settings when the config changes
//! - [`input`] – read hardware input, pick buttons, raise pointer events
//! - [`render`] – draw the machine, overlays and the result modal
//! - [`selection`] – selection controller observer and button poses
//! - [`time`] – advance the clock and ring alarms

pub mod audio;
pub mod dispense;
pub mod gameconfig;
pub mod input;
pub mod render;
pub mod selection;
pub mod time;
