//! Selection controller state.
//!
//! [`InteractionState`] tracks which emoji is selected, which button the
//! pointer rests on, whether input is currently disabled and the message shown
//! above the machine. Pointer events are applied through [`InteractionState::hover`],
//! [`InteractionState::unhover`] and [`InteractionState::click`]; the observer
//! in [`crate::systems::selection`] turns the returned [`ClickOutcome`] into
//! sounds and animator transitions.

use bevy_ecs::prelude::Resource;
use log::{debug, info};

use crate::components::button::ButtonId;
use crate::components::emoji::Emoji;

/// Message shown when `ok` is pressed without a selection.
pub const NO_SELECTION_MESSAGE: &str = "Please select one of the emoji buttons.";

/// Cursor the window should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Auto,
    Pointer,
}

/// Result of applying a click to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Input was disabled; nothing changed.
    Ignored,
    /// `cancel` cleared the selection.
    Cancelled,
    /// `ok` was pressed with nothing selected; the message was set.
    NeedsSelection,
    /// `ok` was pressed with a selection; input is now disabled.
    Dispense(Emoji),
    /// An emoji button was selected.
    Selected(Emoji),
}

#[derive(Resource, Debug, Clone, Default)]
pub struct InteractionState {
    pub selected: Option<Emoji>,
    pub hovered: Option<ButtonId>,
    pub input_disabled: bool,
    pub message: Option<&'static str>,
    pub cursor: CursorStyle,
}

impl InteractionState {
    /// Pointer entered `button`.
    pub fn hover(&mut self, button: ButtonId) {
        if self.input_disabled {
            return;
        }
        self.cursor = CursorStyle::Pointer;
        self.hovered = Some(button);
    }

    /// Pointer left the hovered button.
    pub fn unhover(&mut self) {
        if self.input_disabled {
            return;
        }
        self.cursor = CursorStyle::Auto;
        self.hovered = None;
    }

    /// Apply a click on `button`.
    pub fn click(&mut self, button: ButtonId) -> ClickOutcome {
        if self.input_disabled {
            debug!("click on '{}' ignored while input is disabled", button);
            return ClickOutcome::Ignored;
        }
        match button {
            ButtonId::Cancel => {
                self.selected = None;
                ClickOutcome::Cancelled
            }
            ButtonId::Ok => match self.selected {
                None => {
                    info!("ok pressed without a selection");
                    self.message = Some(NO_SELECTION_MESSAGE);
                    ClickOutcome::NeedsSelection
                }
                Some(emoji) => {
                    self.cursor = CursorStyle::Auto;
                    self.input_disabled = true;
                    ClickOutcome::Dispense(emoji)
                }
            },
            ButtonId::Emoji(emoji) => {
                self.message = None;
                self.selected = Some(emoji);
                ClickOutcome::Selected(emoji)
            }
        }
    }

    /// Emoji buttons glow while selected.
    pub fn is_highlighted(&self, emoji: Emoji) -> bool {
        self.selected == Some(emoji)
    }

    /// Whether `button` is drawn pushed into the panel.
    ///
    /// Every button pushes in while hovered; emoji buttons also stay pushed
    /// while selected.
    pub fn is_pushed(&self, button: ButtonId) -> bool {
        if self.hovered == Some(button) {
            return true;
        }
        match button {
            ButtonId::Emoji(emoji) => self.is_highlighted(emoji),
            _ => false,
        }
    }

    /// Clear the selection and accept input again.
    pub fn reset(&mut self) {
        self.selected = None;
        self.input_disabled = false;
    }
}
