//! Front-panel buttons.
//!
//! Every interactive element on the machine is a [`Button`] tagged with a
//! [`ButtonId`] from a closed set: `ok`, `cancel`, or one of the emoji. A
//! button rests at a fixed model-space position and slides into the panel
//! (towards -x) while pushed. See [`crate::systems::selection::button_pose_system`].

use bevy_ecs::prelude::Component;
use raylib::prelude::{BoundingBox, Vector3};

use crate::components::emoji::Emoji;

/// Identifier of a front-panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Ok,
    Cancel,
    Emoji(Emoji),
}

impl ButtonId {
    /// Every button on the panel.
    pub const ALL: [ButtonId; 7] = [
        ButtonId::Ok,
        ButtonId::Cancel,
        ButtonId::Emoji(Emoji::Smiley),
        ButtonId::Emoji(Emoji::SparkleHeart),
        ButtonId::Emoji(Emoji::HeartSmiley),
        ButtonId::Emoji(Emoji::SadSmiley),
        ButtonId::Emoji(Emoji::ThreeHearts),
    ];

    pub fn id(self) -> &'static str {
        match self {
            ButtonId::Ok => "ok",
            ButtonId::Cancel => "cancel",
            ButtonId::Emoji(e) => e.id(),
        }
    }

    /// Rest position of the button in model space.
    pub fn rest(self) -> Vector3 {
        let (y, z) = match self {
            ButtonId::Ok => (3.28, -1.917),
            ButtonId::Cancel => (2.413, -1.917),
            ButtonId::Emoji(Emoji::Smiley) => (6.006, -1.913),
            ButtonId::Emoji(Emoji::SparkleHeart) => (5.419, -1.908),
            ButtonId::Emoji(Emoji::HeartSmiley) => (6.565, -1.914),
            ButtonId::Emoji(Emoji::SadSmiley) => (4.848, -1.913),
            ButtonId::Emoji(Emoji::ThreeHearts) => (4.22, -1.913),
        };
        let x = match self {
            ButtonId::Ok | ButtonId::Cancel => 2.083,
            ButtonId::Emoji(_) => 2.051,
        };
        Vector3 { x, y, z }
    }

    /// X coordinate while the button is pushed in.
    pub fn pushed_x(self) -> f32 {
        match self {
            ButtonId::Ok | ButtonId::Cancel => 2.0,
            ButtonId::Emoji(_) => 1.95,
        }
    }

    /// Half extents of the clickable box around the button.
    pub fn half_extents(self) -> Vector3 {
        match self {
            ButtonId::Ok | ButtonId::Cancel => Vector3 {
                x: 0.08,
                y: 0.35,
                z: 0.45,
            },
            ButtonId::Emoji(_) => Vector3 {
                x: 0.08,
                y: 0.26,
                z: 0.26,
            },
        }
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A clickable front-panel button.
#[derive(Component, Clone, Copy, Debug)]
pub struct Button {
    pub id: ButtonId,
}

impl Button {
    pub fn new(id: ButtonId) -> Self {
        Button { id }
    }

    /// Model-space pick box for the button centred at `pos`.
    pub fn bounding_box(&self, pos: Vector3) -> BoundingBox {
        let h = self.id.half_extents();
        BoundingBox {
            min: Vector3 {
                x: pos.x - h.x,
                y: pos.y - h.y,
                z: pos.z - h.z,
            },
            max: Vector3 {
                x: pos.x + h.x,
                y: pos.y + h.y,
                z: pos.z + h.z,
            },
        }
    }
}
