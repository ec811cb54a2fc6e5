//! Result modal shown after a dispense.
//!
//! [`ResultModal`] holds the emoji being presented. Layout is computed from
//! the window size by [`ModalLayout::new`] so the renderer and the input
//! system agree on where the close button is.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::emoji::Emoji;

const PANEL_WIDTH: f32 = 360.0;
const PANEL_HEIGHT: f32 = 440.0;
const PANEL_PADDING: f32 = 24.0;
const IMAGE_SIZE: f32 = 270.0;
const CLOSE_HEIGHT: f32 = 44.0;

#[derive(Resource, Debug, Clone, Default)]
pub struct ResultModal {
    showing: Option<Emoji>,
}

impl ResultModal {
    pub fn open(&mut self, emoji: Emoji) {
        self.showing = Some(emoji);
    }

    pub fn close(&mut self) {
        self.showing = None;
    }

    pub fn is_open(&self) -> bool {
        self.showing.is_some()
    }

    pub fn showing(&self) -> Option<Emoji> {
        self.showing
    }

    /// Caption under the image, e.g. "You just received Crying Emoji!".
    pub fn caption(&self) -> Option<String> {
        self.showing
            .map(|emoji| format!("You just received {}!", emoji.label()))
    }
}

/// Screen-space rectangles of the modal.
#[derive(Debug, Clone, Copy)]
pub struct ModalLayout {
    pub panel: Rectangle,
    pub image: Rectangle,
    pub caption_y: f32,
    pub close_button: Rectangle,
}

impl ModalLayout {
    /// Centre the panel in a `screen_w` x `screen_h` window.
    pub fn new(screen_w: f32, screen_h: f32) -> Self {
        let panel = Rectangle {
            x: (screen_w - PANEL_WIDTH) * 0.5,
            y: (screen_h - PANEL_HEIGHT) * 0.5,
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        };
        let image = Rectangle {
            x: panel.x + (PANEL_WIDTH - IMAGE_SIZE) * 0.5,
            y: panel.y + PANEL_PADDING,
            width: IMAGE_SIZE,
            height: IMAGE_SIZE,
        };
        let close_button = Rectangle {
            x: panel.x + PANEL_PADDING,
            y: panel.y + PANEL_HEIGHT - PANEL_PADDING - CLOSE_HEIGHT,
            width: PANEL_WIDTH - 2.0 * PANEL_PADDING,
            height: CLOSE_HEIGHT,
        };
        Self {
            panel,
            image,
            caption_y: image.y + IMAGE_SIZE + PANEL_PADDING,
            close_button,
        }
    }

    pub fn close_button_contains(&self, point: Vector2) -> bool {
        let r = self.close_button;
        point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height
    }
}
