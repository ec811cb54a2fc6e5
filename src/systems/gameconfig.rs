//! Game configuration change detection system.
//!
//! Pushes window settings from [`GameConfig`] to Raylib when the resource is
//! added or modified.

use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

use crate::resources::gameconfig::GameConfig;

/// Apply target FPS, vsync and fullscreen whenever [`GameConfig`] changes.
pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    if !config.is_changed() {
        return;
    }
    let window = &config.window;

    // SAFETY: plain window state flags on the main thread, which owns the window.
    unsafe {
        if window.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    if window.fullscreen != rl.is_window_fullscreen() {
        rl.toggle_fullscreen();
    }

    rl.set_target_fps(window.target_fps);
    info!(
        "config applied: fps={}, vsync={}, fullscreen={}",
        window.target_fps, window.vsync, window.fullscreen
    );
}
