//! Bridge between the ECS world and the audio thread.
//!
//! [`setup_audio`] spawns the thread and inserts the [`AudioBridge`] plus the
//! two message queues. If the thread cannot be spawned the queues still exist
//! and the machine runs silently. [`shutdown_audio`] stops and joins it.
use std::thread::JoinHandle;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{error, info, warn};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;

#[derive(Resource)]
pub struct AudioBridge {
    /// ECS -> audio thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Audio thread -> ECS.
    pub rx_msg: Receiver<AudioMessage>,
    handle: JoinHandle<()>,
}

impl AudioBridge {
    /// Start a named audio thread wired to fresh channels.
    pub fn spawn() -> Result<Self, String> {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
        let handle = std::thread::Builder::new()
            .name("audio".into())
            .spawn(move || audio_thread(rx_cmd, tx_msg))
            .map_err(|e| format!("failed to spawn audio thread: {}", e))?;
        Ok(Self {
            tx_cmd,
            rx_msg,
            handle,
        })
    }

    /// Send `Shutdown` and wait for the thread to exit.
    pub fn stop(self) {
        let _ = self.tx_cmd.send(AudioCmd::Shutdown);
        match self.handle.join() {
            Ok(()) => info!("audio thread stopped"),
            Err(_) => warn!("audio thread panicked during shutdown"),
        }
    }
}

/// Spawn the audio thread and register the bridge and message queues.
pub fn setup_audio(world: &mut World) {
    match AudioBridge::spawn() {
        Ok(bridge) => {
            world.insert_resource(bridge);
        }
        Err(e) => error!("{}; sound disabled", e),
    }
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();
}

/// Stop the audio thread if it is running.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        bridge.stop();
    }
}
