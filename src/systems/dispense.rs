//! Dispense animation systems.
//!
//! - [`dispense_system`] – advances the [`Dispenser`] each frame, moves the
//!   falling emoji and arms the settle alarm on landing
//! - [`settle_alarm_observer`] – finishes the cycle when the alarm rings
//! - [`dispense_complete_observer`] – opens the result modal
//! - [`reset_observer`] – returns every emoji to its shelf on modal close
//!
//! The path itself is computed by [`EmojiSlot`](crate::components::emoji::EmojiSlot).

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector3;

use crate::components::alarm::{Alarm, AlarmKind};
use crate::components::emoji::Emoji;
use crate::components::worldposition::WorldPosition;
use crate::events::alarm::AlarmEvent;
use crate::events::dispense::{DispenseCompleteEvent, ResetRequestEvent};
use crate::resources::dispenser::Dispenser;
use crate::resources::emojimeshes::EmojiMeshes;
use crate::resources::interaction::InteractionState;
use crate::resources::modal::ResultModal;
use crate::resources::worldtime::WorldTime;

/// Advance the falling emoji and arm the settle alarm on landing.
pub fn dispense_system(
    world_time: Res<WorldTime>,
    mut dispenser: ResMut<Dispenser>,
    meshes: Res<EmojiMeshes>,
    mut positions: Query<&mut WorldPosition>,
    mut commands: Commands,
) {
    let Some(step) = dispenser.advance(world_time.delta) else {
        return;
    };

    if let Some(entity) = meshes.get(step.emoji)
        && let Ok(mut wp) = positions.get_mut(entity)
    {
        wp.pos = step.position;
    }

    if step.landed {
        let settle = dispenser.timing().settle_secs();
        let alarm = commands.spawn(Alarm::after(settle, AlarmKind::Settle)).id();
        dispenser.arm(alarm);
        debug!("settle alarm {:?} armed for {:.2}s", alarm, settle);
    }
}

/// Finish the dispense when its settle alarm rings.
///
/// Re-enables input and triggers [`DispenseCompleteEvent`].
pub fn settle_alarm_observer(
    trigger: On<AlarmEvent>,
    mut dispenser: ResMut<Dispenser>,
    mut interaction: ResMut<InteractionState>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.kind != AlarmKind::Settle {
        return;
    }
    if let Some(emoji) = dispenser.finish(event.entity) {
        interaction.input_disabled = false;
        commands.trigger(DispenseCompleteEvent { emoji });
    }
}

/// Present the dispensed emoji.
pub fn dispense_complete_observer(
    trigger: On<DispenseCompleteEvent>,
    mut modal: ResMut<ResultModal>,
) {
    modal.open(trigger.event().emoji);
}

/// Return every dispensable emoji to its shelf and clear the selection.
///
/// A dispense still in flight is aborted and its settle alarm cancelled.
pub fn reset_observer(
    _trigger: On<ResetRequestEvent>,
    mut dispenser: ResMut<Dispenser>,
    mut interaction: ResMut<InteractionState>,
    mut modal: ResMut<ResultModal>,
    meshes: Res<EmojiMeshes>,
    mut positions: Query<&mut WorldPosition>,
    mut commands: Commands,
) {
    if let Some(alarm) = dispenser.abort()
        && let Ok(mut alarm_entity) = commands.get_entity(alarm)
    {
        alarm_entity.despawn();
    }
    restore_rest_positions(&meshes, &mut positions);
    interaction.reset();
    modal.close();
    info!("machine reset");
}

fn restore_rest_positions(meshes: &EmojiMeshes, positions: &mut Query<&mut WorldPosition>) {
    for (emoji, entity) in meshes.iter() {
        if let Ok(mut wp) = positions.get_mut(entity) {
            wp.pos = rest_position(emoji);
        }
    }
}

fn rest_position(emoji: Emoji) -> Vector3 {
    emoji.slot().rest
}
