use bevy_ecs::prelude::Resource;

/// Present while the debug overlay is shown.
///
/// The renderer then also outlines every button's pick box. Toggled by
/// [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) or
/// enabled at startup with `--debug`.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
