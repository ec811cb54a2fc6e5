//! Pointer events raised by the renderer's picking.
//!
//! The input system casts a ray from the cursor into the scene and raises a
//! [`PointerEvent`] whenever the cursor enters or leaves a
//! [`Button`](crate::components::button::Button), or when a button is
//! clicked. Keyboard shortcuts raise the same click events, so the selection
//! controller only has one entry point.

use bevy_ecs::prelude::*;

use crate::components::button::ButtonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
    Click,
}

/// Event emitted when the pointer interacts with a button.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The button under the pointer.
    pub button: ButtonId,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn enter(button: ButtonId) -> Self {
        Self {
            button,
            kind: PointerKind::Enter,
        }
    }

    pub fn leave(button: ButtonId) -> Self {
        Self {
            button,
            kind: PointerKind::Leave,
        }
    }

    pub fn click(button: ButtonId) -> Self {
        Self {
            button,
            kind: PointerKind::Click,
        }
    }
}
