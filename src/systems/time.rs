//! Clock and alarm systems.
//!
//! - [`update_world_time`] starts a new frame on the shared [`WorldTime`].
//! - [`update_alarms`] counts every [`Alarm`] down and rings the due ones.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::alarm::Alarm;
use crate::events::alarm::AlarmEvent;
use crate::resources::worldtime::WorldTime;

/// Advance the `WorldTime` resource by the unscaled frame delta `dt`.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}

/// Ring due alarms: trigger an [`AlarmEvent`] and despawn the alarm entity.
pub fn update_alarms(
    world_time: Res<WorldTime>,
    mut alarms: Query<(Entity, &mut Alarm)>,
    mut commands: Commands,
) {
    for (entity, mut alarm) in alarms.iter_mut() {
        if !alarm.count_down(world_time.delta) {
            continue;
        }
        debug!("alarm {:?} ({:?}) rang", entity, alarm.kind);
        commands.trigger(AlarmEvent {
            entity,
            kind: alarm.kind,
        });
        commands.entity(entity).despawn();
    }
}
