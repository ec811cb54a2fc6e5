//! Alarm notifications.
use bevy_ecs::prelude::*;

use crate::components::alarm::AlarmKind;

/// Triggered once when an [`Alarm`](crate::components::alarm::Alarm) rings.
///
/// The alarm entity is despawned right after, so `entity` only identifies
/// which alarm rang; it cannot be queried.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmEvent {
    pub entity: Entity,
    pub kind: AlarmKind,
}
