//! Selection controller systems.
//!
//! [`pointer_observer`] is the only entry point for button interaction:
//! mouse picking and keyboard shortcuts both raise [`PointerEvent`]s. The
//! observer feeds them into [`InteractionState`] and acts on the returned
//! [`ClickOutcome`]. [`button_pose_system`] slides buttons in and out of the
//! panel to match the hover and selection state.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::button::Button;
use crate::components::worldposition::WorldPosition;
use crate::events::audio::SoundKind;
use crate::events::pointer::{PointerEvent, PointerKind};
use crate::resources::dispenser::Dispenser;
use crate::resources::interaction::{ClickOutcome, InteractionState};
use crate::systems::audio::Sfx;

/// Apply pointer events to the selection controller.
pub fn pointer_observer(
    trigger: On<PointerEvent>,
    mut interaction: ResMut<InteractionState>,
    mut dispenser: ResMut<Dispenser>,
    mut sfx: Sfx,
) {
    let event = trigger.event();
    match event.kind {
        PointerKind::Enter => interaction.hover(event.button),
        PointerKind::Leave => {
            if interaction.hovered == Some(event.button) {
                interaction.unhover();
            }
        }
        PointerKind::Click => match interaction.click(event.button) {
            ClickOutcome::Ignored | ClickOutcome::NeedsSelection => {}
            ClickOutcome::Cancelled => sfx.play(SoundKind::Cancel),
            ClickOutcome::Selected(emoji) => {
                debug!("selected '{}'", emoji);
                sfx.play(SoundKind::Emoji);
            }
            ClickOutcome::Dispense(emoji) => {
                sfx.play(SoundKind::Check);
                if !dispenser.start(emoji) {
                    warn!("animator busy, re-enabling input");
                    interaction.input_disabled = false;
                }
            }
        },
    }
}

/// Move every button to its rest or pushed pose.
pub fn button_pose_system(
    interaction: Res<InteractionState>,
    mut buttons: Query<(&Button, &mut WorldPosition)>,
) {
    if !interaction.is_changed() {
        return;
    }
    for (button, mut wp) in buttons.iter_mut() {
        let mut pos = button.id.rest();
        if interaction.is_pushed(button.id) {
            pos.x = button.id.pushed_x();
        }
        if wp.pos != pos {
            wp.pos = pos;
        }
    }
}
