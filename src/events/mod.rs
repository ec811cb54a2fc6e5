//! Event types and observers used by the machine.
//!
//! Submodules:
//! - [`alarm`] – one-shot alarm notifications
//! - [`audio`] – commands and messages for the background audio thread
//! - [`dispense`] – dispense completion and reset requests
//! - [`pointer`] – button enter/leave/click notifications from picking
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod alarm;
pub mod audio;
pub mod dispense;
pub mod pointer;
pub mod switchdebug;
