//! Per-frame input resource.
//!
//! Captures the keyboard shortcuts and the pointer hover target the machine
//! cares about. Number keys select emoji in [`Emoji::ALL`] order, Enter
//! confirms and Backspace cancels; while the result modal is open Enter,
//! Space or Escape close it.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::button::ButtonId;
use crate::components::emoji::{EMOJI_COUNT, Emoji};

/// A key and whether it went down this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: KeyboardKey,
    pub pressed: bool,
}

impl Shortcut {
    pub const fn new(key: KeyboardKey) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Indexed by [`Emoji::index`].
    pub select: [Shortcut; EMOJI_COUNT],
    pub confirm: Shortcut,
    pub cancel: Shortcut,
    /// Extra keys that dismiss the result modal besides `confirm`.
    pub dismiss: [Shortcut; 2],
    pub debug_overlay: Shortcut,
    /// Button under the pointer as of the last picking pass.
    pub pointer_over: Option<ButtonId>,
}

impl Default for InputState {
    fn default() -> Self {
        use KeyboardKey::*;
        Self {
            select: [KEY_ONE, KEY_TWO, KEY_THREE, KEY_FOUR, KEY_FIVE].map(Shortcut::new),
            confirm: Shortcut::new(KEY_ENTER),
            cancel: Shortcut::new(KEY_BACKSPACE),
            dismiss: [KEY_ESCAPE, KEY_SPACE].map(Shortcut::new),
            debug_overlay: Shortcut::new(KEY_F11),
            pointer_over: None,
        }
    }
}

impl InputState {
    /// Every bound shortcut, for polling.
    pub fn shortcuts_mut(&mut self) -> impl Iterator<Item = &mut Shortcut> {
        self.select
            .iter_mut()
            .chain(self.dismiss.iter_mut())
            .chain([&mut self.confirm, &mut self.cancel, &mut self.debug_overlay])
    }

    /// Button clicks requested by keyboard shortcuts pressed this frame.
    pub fn shortcut_clicks(&self) -> Vec<ButtonId> {
        let mut clicks: Vec<ButtonId> = Emoji::ALL
            .iter()
            .filter(|e| self.select[e.index()].pressed)
            .map(|e| ButtonId::Emoji(*e))
            .collect();
        if self.cancel.pressed {
            clicks.push(ButtonId::Cancel);
        }
        if self.confirm.pressed {
            clicks.push(ButtonId::Ok);
        }
        clicks
    }

    /// Whether any key that closes the result modal was pressed this frame.
    pub fn close_modal_pressed(&self) -> bool {
        self.confirm.pressed || self.dismiss.iter().any(|s| s.pressed)
    }
}
