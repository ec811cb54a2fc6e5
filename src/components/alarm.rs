//! One-shot alarms.
//!
//! An [`Alarm`] lives on its own entity and counts down scaled frame time.
//! When it rings, [`update_alarms`](crate::systems::time::update_alarms)
//! triggers an [`AlarmEvent`](crate::events::alarm::AlarmEvent) and despawns
//! the entity. Despawning it earlier cancels it, so whoever holds the entity
//! id holds the cancellation handle.
use bevy_ecs::prelude::Component;

/// An alarm this close to zero rings; summed frame deltas drift.
pub const RING_TOLERANCE_SECS: f32 = 1e-4;

/// What an alarm is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmKind {
    /// Pause between an emoji landing and the result being shown.
    Settle,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Alarm {
    pub kind: AlarmKind,
    /// Seconds left before the alarm rings.
    pub remaining: f32,
}

impl Alarm {
    pub fn after(seconds: f32, kind: AlarmKind) -> Self {
        Alarm {
            kind,
            remaining: seconds.max(0.0),
        }
    }

    /// Count down `dt` seconds. Returns true once the alarm has rung.
    pub fn count_down(&mut self, dt: f32) -> bool {
        self.remaining -= dt.max(0.0);
        self.remaining <= RING_TOLERANCE_SECS
    }
}
