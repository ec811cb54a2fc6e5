//! Scene setup.
//!
//! The machine is assembled from primitive shapes in model space: a cabinet
//! with four shelves behind a glass front, a button panel on the right and a
//! collection tray at the bottom. Each of the five dispensable emoji gets its
//! own entity registered in [`EmojiMeshes`]; decorative stock fills the other
//! shelf places.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Color, Vector3};

use crate::components::button::{Button, ButtonId};
use crate::components::emoji::{Emoji, EmojiPiece, STOCK, StockPiece};
use crate::components::meshshape::MeshShape;
use crate::components::worldposition::WorldPosition;
use crate::events::audio::AudioCmd;
use crate::resources::emojimeshes::EmojiMeshes;
use crate::resources::gameconfig::GameConfig;
use crate::systems::audio::load_sound_cmds;

/// Radius of an emoji model.
pub const EMOJI_RADIUS: f32 = 0.25;

const CABINET: Color = Color::new(70, 110, 170, 255);
const SHELF: Color = Color::new(200, 205, 215, 255);
const GLASS: Color = Color::new(150, 200, 230, 255);
const PANEL: Color = Color::new(50, 55, 65, 255);

const fn v3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3 { x, y, z }
}

/// Static machine parts: `(centre, size, shape)`.
const PARTS: [(Vector3, Vector3, Part); 12] = [
    // base and roof
    (v3(1.0, 0.25, -0.25), v3(2.2, 0.5, 4.5), Part::Solid(CABINET)),
    (v3(1.0, 7.1, -0.25), v3(2.2, 0.2, 4.5), Part::Solid(CABINET)),
    // back and side walls
    (v3(-0.05, 3.7, -0.25), v3(0.1, 6.6, 4.5), Part::Solid(CABINET)),
    (v3(1.0, 3.7, 1.95), v3(2.2, 6.6, 0.1), Part::Solid(CABINET)),
    (v3(1.0, 3.7, -2.45), v3(2.2, 6.6, 0.1), Part::Solid(CABINET)),
    // divider between the shelves and the button column
    (v3(1.0, 3.7, -1.2), v3(2.0, 6.6, 0.1), Part::Solid(CABINET)),
    // shelves, one under each row of emoji
    (v3(0.9, 2.28, 0.375), v3(1.6, 0.06, 3.05), Part::Solid(SHELF)),
    (v3(0.9, 3.46, 0.375), v3(1.6, 0.06, 3.05), Part::Solid(SHELF)),
    (v3(0.9, 4.66, 0.375), v3(1.6, 0.06, 3.05), Part::Solid(SHELF)),
    (v3(0.9, 5.86, 0.375), v3(1.6, 0.06, 3.05), Part::Solid(SHELF)),
    // glass front and button panel
    (v3(1.95, 4.2, 0.375), v3(0.02, 4.4, 3.05), Part::Wires(GLASS)),
    (v3(1.95, 4.4, -1.85), v3(0.1, 5.0, 1.1), Part::Solid(PANEL)),
];

#[derive(Clone, Copy)]
enum Part {
    Solid(Color),
    Wires(Color),
}

impl Part {
    fn shape(self, size: Vector3) -> MeshShape {
        match self {
            Part::Solid(color) => MeshShape::Cube { size, color },
            Part::Wires(color) => MeshShape::CubeWires { size, color },
        }
    }
}

/// Display colour of an emoji model.
pub fn emoji_color(emoji: Emoji) -> Color {
    match emoji {
        Emoji::Smiley => Color::new(255, 204, 77, 255),
        Emoji::SparkleHeart => Color::new(255, 110, 180, 255),
        Emoji::HeartSmiley => Color::new(255, 170, 60, 255),
        Emoji::SadSmiley => Color::new(120, 180, 255, 255),
        Emoji::ThreeHearts => Color::new(230, 50, 90, 255),
    }
}

fn button_color(id: ButtonId) -> Color {
    match id {
        ButtonId::Ok => Color::new(60, 180, 90, 255),
        ButtonId::Cancel => Color::new(210, 60, 60, 255),
        ButtonId::Emoji(emoji) => emoji_color(emoji),
    }
}

/// Spawn the machine and queue the sound effects for loading.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<EmojiMeshes>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    for (centre, size, part) in PARTS {
        commands.spawn((WorldPosition::from(centre), part.shape(size)));
    }

    for id in ButtonId::ALL {
        let h = id.half_extents();
        commands.spawn((
            Button::new(id),
            WorldPosition::from(id.rest()),
            MeshShape::Cube {
                size: v3(h.x * 2.0, h.y * 2.0, h.z * 2.0),
                color: button_color(id),
            },
        ));
    }

    for emoji in Emoji::ALL {
        let entity = commands
            .spawn((
                EmojiPiece { emoji },
                WorldPosition::from(emoji.slot().rest),
                MeshShape::Sphere {
                    radius: EMOJI_RADIUS,
                    color: emoji_color(emoji),
                },
            ))
            .id();
        meshes.insert(emoji, entity);
    }

    for (emoji, pos) in STOCK {
        commands.spawn((
            StockPiece { emoji },
            WorldPosition::from(pos),
            MeshShape::Sphere {
                radius: EMOJI_RADIUS,
                color: emoji_color(emoji),
            },
        ));
    }

    audio_cmd_writer.write_batch(load_sound_cmds(&config.assets.sounds));
    info!("machine assembled, sounds from '{}'", config.assets.sounds.display());
}
