//! Dispense animator state machine.
//!
//! The [`Dispenser`] resource drives the fall of the selected emoji:
//!
//! ```text
//! Idle --start--> Falling --progress reaches 1--> Settling --alarm rings--> Idle
//! ```
//!
//! While `Falling`, [`Dispenser::advance`] is called once per frame with the
//! frame delta and returns the position the animated emoji must be moved to.
//! On landing the animator enters `Settling` and waits for an alarm (a
//! [`Alarm`](crate::components::alarm::Alarm) entity) armed by the dispense
//! system. [`Dispenser::finish`] completes the cycle when that alarm rings;
//! [`Dispenser::abort`] cancels whatever is in flight and hands back the alarm
//! so the caller can despawn it.

use bevy_ecs::prelude::{Entity, Resource};
use log::{debug, info, warn};
use raylib::prelude::Vector3;

use crate::components::emoji::Emoji;

/// Default duration of the forward segment of the fall.
pub const DEFAULT_CORNER_MS: u32 = 500;
/// Default pause between landing and showing the result.
pub const DEFAULT_SETTLE_MS: u32 = 1500;

/// Summed frame deltas drift; a fall this close to its end has landed.
pub const LANDING_TOLERANCE_SECS: f32 = 1e-4;

/// Fixed timings of a dispense cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispenseTiming {
    /// Milliseconds spent moving from rest to the corner.
    pub corner_ms: u32,
    /// Milliseconds between landing and completion.
    pub settle_ms: u32,
}

impl Default for DispenseTiming {
    fn default() -> Self {
        Self {
            corner_ms: DEFAULT_CORNER_MS,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

impl DispenseTiming {
    pub fn settle_secs(&self) -> f32 {
        self.settle_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DispenseState {
    #[default]
    Idle,
    Falling {
        emoji: Emoji,
        /// Seconds since the fall started.
        elapsed: f32,
    },
    Settling {
        emoji: Emoji,
        /// Pending alarm; `None` until the dispense system arms it.
        alarm: Option<Entity>,
    },
}

/// Position update produced by one animator tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallStep {
    pub emoji: Emoji,
    pub position: Vector3,
    /// True on the tick the emoji reaches the drop-off point.
    pub landed: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Dispenser {
    state: DispenseState,
    timing: DispenseTiming,
}

impl Dispenser {
    pub fn new(timing: DispenseTiming) -> Self {
        Self {
            state: DispenseState::Idle,
            timing,
        }
    }

    pub fn state(&self) -> DispenseState {
        self.state
    }

    pub fn timing(&self) -> DispenseTiming {
        self.timing
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DispenseState::Idle)
    }

    /// Emoji currently being dispensed, if any.
    pub fn active_emoji(&self) -> Option<Emoji> {
        match self.state {
            DispenseState::Idle => None,
            DispenseState::Falling { emoji, .. } | DispenseState::Settling { emoji, .. } => {
                Some(emoji)
            }
        }
    }

    /// Normalised fall progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.state {
            DispenseState::Idle => 0.0,
            DispenseState::Falling { emoji, elapsed } => {
                let total = emoji.slot().total_secs(self.timing.corner_ms);
                if total > 0.0 {
                    (elapsed / total).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
            DispenseState::Settling { .. } => 1.0,
        }
    }

    /// Begin dropping `emoji`. Returns false if a dispense is already running.
    pub fn start(&mut self, emoji: Emoji) -> bool {
        if !self.is_idle() {
            warn!(
                "dispense of '{}' refused, animator is {:?}",
                emoji, self.state
            );
            return false;
        }
        info!("dispensing '{}'", emoji);
        self.state = DispenseState::Falling {
            emoji,
            elapsed: 0.0,
        };
        true
    }

    /// Advance the fall by `delta` seconds.
    ///
    /// Returns `None` unless the animator is falling. Progress never decreases
    /// and is clamped to 1; on the landing tick the position is exactly the
    /// drop-off point and the animator moves to `Settling`.
    pub fn advance(&mut self, delta: f32) -> Option<FallStep> {
        let DispenseState::Falling { emoji, elapsed } = self.state else {
            return None;
        };
        let slot = emoji.slot();
        let elapsed = elapsed + delta.max(0.0);

        if elapsed + LANDING_TOLERANCE_SECS >= slot.total_secs(self.timing.corner_ms) {
            debug!("'{}' landed after {:.3}s", emoji, elapsed);
            self.state = DispenseState::Settling { emoji, alarm: None };
            return Some(FallStep {
                emoji,
                position: slot.end(),
                landed: true,
            });
        }

        self.state = DispenseState::Falling { emoji, elapsed };
        Some(FallStep {
            emoji,
            position: slot.position_at(self.timing.corner_ms, self.progress()),
            landed: false,
        })
    }

    /// Attach the settle alarm. Only valid right after landing.
    pub fn arm(&mut self, alarm: Entity) -> bool {
        match &mut self.state {
            DispenseState::Settling { alarm: slot @ None, .. } => {
                *slot = Some(alarm);
                true
            }
            _ => {
                warn!("settle alarm {:?} armed outside of landing", alarm);
                false
            }
        }
    }

    /// Complete the cycle when `alarm` rings. Stale alarms are ignored.
    pub fn finish(&mut self, alarm: Entity) -> Option<Emoji> {
        match self.state {
            DispenseState::Settling {
                emoji,
                alarm: Some(pending),
            } if pending == alarm => {
                info!("'{}' dispensed", emoji);
                self.state = DispenseState::Idle;
                Some(emoji)
            }
            _ => {
                debug!("ignoring stale settle alarm {:?}", alarm);
                None
            }
        }
    }

    /// Cancel any running dispense. Returns the pending alarm to cancel.
    pub fn abort(&mut self) -> Option<Entity> {
        let alarm = match self.state {
            DispenseState::Idle => return None,
            DispenseState::Falling { emoji, .. } => {
                info!("aborting fall of '{}'", emoji);
                None
            }
            DispenseState::Settling { emoji, alarm } => {
                info!("aborting settle of '{}'", emoji);
                alarm
            }
        };
        self.state = DispenseState::Idle;
        alarm
    }
}
