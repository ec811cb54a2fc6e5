//! Dispense lifecycle events.
//!
//! - [`DispenseCompleteEvent`] is triggered once the settle delay after a fall
//!   has elapsed. The presentation layer opens the result modal on it.
//! - [`ResetRequestEvent`] is triggered when the result modal is closed. It
//!   returns every dispensable emoji to its shelf and clears the selection.

use bevy_ecs::prelude::*;

use crate::components::emoji::Emoji;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispenseCompleteEvent {
    /// The emoji that was dispensed.
    pub emoji: Emoji,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ResetRequestEvent {}
