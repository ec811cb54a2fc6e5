//! Debug overlay toggle (F11).
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Flip the presence of [`DebugMode`].
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    debug_mode: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    let enable = debug_mode.is_none();
    if enable {
        commands.insert_resource(DebugMode::default());
    } else {
        commands.remove_resource::<DebugMode>();
    }
    info!("debug overlay {}", if enable { "on" } else { "off" });
}
