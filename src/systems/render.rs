//! Rendering.
//!
//! [`render_system`] is an exclusive system: it takes the Raylib handle out of
//! the world for the duration of the frame, draws the 3D machine through the
//! shared [`Camera3DRes`], then the 2D overlays (selection message, result
//! modal, debug info). [`apply_cursor`] mirrors the controller's cursor style
//! onto the window.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;

use crate::components::button::{Button, ButtonId};
use crate::components::meshshape::MeshShape;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::{Camera3DRes, to_scene};
use crate::resources::debugmode::DebugMode;
use crate::resources::dispenser::{DispenseState, Dispenser};
use crate::resources::emojitextures::EmojiTextures;
use crate::resources::interaction::{CursorStyle, InteractionState};
use crate::resources::modal::{ModalLayout, ResultModal};

const BACKGROUND: Color = Color::new(236, 240, 246, 255);
const GLOW_COLOR: Color = Color::new(0xff, 0xaa, 0xee, 255);
const GLOW_INTENSITY: f32 = 0.25;
const MESSAGE_COLOR: Color = Color::new(200, 40, 60, 255);
const MESSAGE_SIZE: i32 = 24;
const CAPTION_SIZE: i32 = 20;

/// Blend `base` toward `tint` by `intensity` in `[0, 1]`.
pub(crate) fn glow(base: Color, tint: Color, intensity: f32) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::new(
        mix(base.r, tint.r),
        mix(base.g, tint.g),
        mix(base.b, tint.b),
        base.a,
    )
}

/// Colour a shape is drawn with, accounting for the selection glow.
fn shape_color(shape: &MeshShape, button: Option<&Button>, interaction: &InteractionState) -> Color {
    match button.map(|b| b.id) {
        Some(ButtonId::Emoji(emoji)) if interaction.is_highlighted(emoji) => {
            glow(shape.color(), GLOW_COLOR, GLOW_INTENSITY)
        }
        _ => shape.color(),
    }
}

/// Draw one frame.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        warn!("render skipped: no raylib handle");
        return;
    };
    let Some(th) = world.remove_non_send_resource::<RaylibThread>() else {
        warn!("render skipped: no raylib thread");
        world.insert_non_send_resource(rl);
        return;
    };
    {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(BACKGROUND);
        {
            let camera = world.resource::<Camera3DRes>().0;
            let mut d3 = d.begin_mode3D(camera);
            render_scene(world, &mut d3);
        }
        render_message(world, &mut d);
        render_modal(world, &mut d);
        render_debug_ui(world, &mut d);
    }
    world.insert_non_send_resource(th);
    world.insert_non_send_resource(rl);
}

fn render_scene(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    let interaction = world.resource::<InteractionState>().clone();
    let debug = world.contains_resource::<DebugMode>();
    let mut q = world.query::<(&MeshShape, &WorldPosition, Option<&Button>)>();
    for (shape, wp, button) in q.iter(world) {
        let pos = to_scene(wp.pos);
        let color = shape_color(shape, button, &interaction);
        match *shape {
            MeshShape::Cube { size, .. } => {
                d3.draw_cube(pos, size.x, size.y, size.z, color);
                d3.draw_cube_wires(pos, size.x, size.y, size.z, Color::DARKGRAY);
            }
            MeshShape::CubeWires { size, .. } => {
                d3.draw_cube_wires(pos, size.x, size.y, size.z, color);
            }
            MeshShape::Sphere { radius, .. } => d3.draw_sphere(pos, radius, color),
        }
        if debug && let Some(button) = button {
            d3.draw_bounding_box(button.bounding_box(pos), Color::RED);
        }
    }
}

fn render_message(world: &World, d: &mut RaylibDrawHandle) {
    let Some(message) = world.resource::<InteractionState>().message else {
        return;
    };
    let width = d.measure_text(message, MESSAGE_SIZE);
    let x = (d.get_screen_width() - width) / 2;
    d.draw_text(message, x, 24, MESSAGE_SIZE, MESSAGE_COLOR);
}

fn render_modal(world: &World, d: &mut RaylibDrawHandle) {
    let modal = world.resource::<ResultModal>();
    let (Some(emoji), Some(caption)) = (modal.showing(), modal.caption()) else {
        return;
    };
    let (sw, sh) = (d.get_screen_width(), d.get_screen_height());
    let layout = ModalLayout::new(sw as f32, sh as f32);

    d.draw_rectangle(0, 0, sw, sh, Color::new(0, 0, 0, 140));
    d.draw_rectangle_rec(layout.panel, Color::RAYWHITE);
    d.draw_rectangle_lines_ex(layout.panel, 2.0, Color::DARKGRAY);

    let texture = world
        .get_non_send_resource::<EmojiTextures>()
        .and_then(|store| store.get(emoji));
    match texture {
        Some(tex) => {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            d.draw_texture_pro(tex, src, layout.image, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        }
        None => {
            d.draw_rectangle_rec(layout.image, Color::LIGHTGRAY);
            let label = emoji.label();
            let w = d.measure_text(label, CAPTION_SIZE);
            d.draw_text(
                label,
                (layout.image.x + (layout.image.width - w as f32) * 0.5) as i32,
                (layout.image.y + layout.image.height * 0.5) as i32 - CAPTION_SIZE / 2,
                CAPTION_SIZE,
                Color::GRAY,
            );
        }
    }

    let w = d.measure_text(&caption, CAPTION_SIZE);
    d.draw_text(
        &caption,
        (layout.panel.x + (layout.panel.width - w as f32) * 0.5) as i32,
        layout.caption_y as i32,
        CAPTION_SIZE,
        Color::BLACK,
    );

    let close = layout.close_button;
    let hover = close.check_collision_point_rec(d.get_mouse_position());
    let fill = if hover { Color::SKYBLUE } else { Color::LIGHTGRAY };
    d.draw_rectangle_rec(close, fill);
    let w = d.measure_text("Close", CAPTION_SIZE);
    d.draw_text(
        "Close",
        (close.x + (close.width - w as f32) * 0.5) as i32,
        (close.y + (close.height - CAPTION_SIZE as f32) * 0.5) as i32,
        CAPTION_SIZE,
        Color::BLACK,
    );
}

fn dispense_summary(dispenser: &Dispenser) -> String {
    match dispenser.state() {
        DispenseState::Idle => "idle".to_string(),
        DispenseState::Falling { emoji, .. } => {
            format!("falling {} ({:.0}%)", emoji, dispenser.progress() * 100.0)
        }
        DispenseState::Settling { emoji, alarm } => {
            format!("settling {} (alarm {:?})", emoji, alarm)
        }
    }
}

fn render_debug_ui(world: &World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let interaction = world.resource::<InteractionState>();
    let dispenser = world.resource::<Dispenser>();
    let lines = [
        format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps()),
        format!("Animator: {}", dispense_summary(dispenser)),
        format!(
            "Selected: {:?} | Hovered: {:?} | Input disabled: {}",
            interaction.selected.map(|e| e.id()),
            interaction.hovered.map(|b| b.id()),
            interaction.input_disabled
        ),
        format!("Entities: {}", world.entities().len()),
    ];
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, 10 + 20 * i as i32, 10, Color::BLACK);
    }
}

/// Update the window cursor when the controller's cursor style changes.
pub fn apply_cursor(
    interaction: Res<InteractionState>,
    mut rl: NonSendMut<RaylibHandle>,
    mut applied: Local<Option<CursorStyle>>,
) {
    if *applied == Some(interaction.cursor) {
        return;
    }
    let cursor = match interaction.cursor {
        CursorStyle::Auto => MouseCursor::MOUSE_CURSOR_DEFAULT,
        CursorStyle::Pointer => MouseCursor::MOUSE_CURSOR_POINTING_HAND,
    };
    rl.set_mouse_cursor(cursor);
    *applied = Some(interaction.cursor);
}
