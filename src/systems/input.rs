//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame,
//! writes the results into [`InputState`] and raises the events the machine
//! reacts to:
//! - [`PointerEvent`] enter/leave/click from ray-picking the front-panel
//!   buttons, plus clicks from keyboard shortcuts;
//! - [`ResetRequestEvent`] when the result modal is dismissed;
//! - [`SwitchDebugEvent`] on F11.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::button::{Button, ButtonId};
use crate::components::worldposition::WorldPosition;
use crate::events::dispense::ResetRequestEvent;
use crate::events::pointer::PointerEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera3d::{Camera3DRes, to_scene};
use crate::resources::input::InputState;
use crate::resources::modal::{ModalLayout, ResultModal};

/// Nearest button hit by `ray`.
///
/// `buttons` yields each button with its model-space position; pick boxes are
/// moved into the scene before testing.
pub fn pick_button(
    ray: Ray,
    buttons: impl IntoIterator<Item = (Button, Vector3)>,
) -> Option<ButtonId> {
    buttons
        .into_iter()
        .filter_map(|(button, pos)| {
            let hit = button.bounding_box(to_scene(pos)).get_ray_collision_box(ray);
            hit.hit.then_some((button.id, hit.distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Poll Raylib for keyboard and mouse input and raise interaction events.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    camera: Res<Camera3DRes>,
    modal: Res<ResultModal>,
    buttons: Query<(&Button, &WorldPosition)>,
    mut commands: Commands,
) {
    for shortcut in input.shortcuts_mut() {
        shortcut.pressed = rl.is_key_pressed(shortcut.key);
    }

    if input.debug_overlay.pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    let mouse = rl.get_mouse_position();
    let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

    // The modal swallows all machine input while open.
    if modal.is_open() {
        if let Some(previous) = input.pointer_over.take() {
            commands.trigger(PointerEvent::leave(previous));
        }
        let layout = ModalLayout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        if input.close_modal_pressed() || (clicked && layout.close_button_contains(mouse)) {
            commands.trigger(ResetRequestEvent {});
        }
        return;
    }

    let ray = rl.get_screen_to_world_ray(mouse, camera.0);
    let picked = pick_button(ray, buttons.iter().map(|(b, wp)| (*b, wp.pos)));

    if picked != input.pointer_over {
        if let Some(previous) = input.pointer_over {
            commands.trigger(PointerEvent::leave(previous));
        }
        if let Some(current) = picked {
            commands.trigger(PointerEvent::enter(current));
        }
        input.pointer_over = picked;
    }

    if clicked && let Some(button) = picked {
        commands.trigger(PointerEvent::click(button));
    }

    for button in input.shortcut_clicks() {
        commands.trigger(PointerEvent::click(button));
    }
}
