//! Audio systems backed by a dedicated thread and Raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device
//!   and every loaded [`Sound`], and answers [`AudioCmd`] messages with
//!   [`AudioMessage`] replies.
//! - [`forward_audio_cmds`] pushes ECS-side commands into the channel.
//! - [`poll_audio_messages`] drains the replies into the ECS message queue.
//! - [`log_audio_messages`] reports load and playback failures.
//! - [`Sfx`] is the system parameter the machine uses to play its sounds.
//!
//! The thread must be created once via
//! [`crate::resources::audio::setup_audio`] and joined via
//! [`crate::resources::audio::shutdown_audio`].

use std::path::Path;

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

use crate::events::audio::{AudioCmd, AudioMessage, SoundKind};
use crate::resources::audio::AudioBridge;

/// Drain pending replies from the audio thread into [`Messages<AudioMessage>`].
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
///
/// Without a bridge the commands are consumed and dropped.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    let Some(bridge) = bridge else {
        reader.clear();
        return;
    };
    for cmd in reader.read() {
        // the thread is gone during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Report audio failures. A missing sound never stops the machine.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("sound '{}' unavailable: {}", id, error)
            }
            AudioMessage::FxPlayFailed { id } => warn!("sound '{}' is not loaded", id),
            AudioMessage::FxLoaded { id } => debug!("sound '{}' ready", id),
        }
    }
}

/// Writes play requests for the machine's sound effects.
#[derive(SystemParam)]
pub struct Sfx<'w> {
    writer: MessageWriter<'w, AudioCmd>,
}

impl Sfx<'_> {
    pub fn play(&mut self, kind: SoundKind) {
        self.writer.write(AudioCmd::PlayFx {
            id: kind.fx_id().to_string(),
        });
    }
}

/// Load commands for every sound effect found under `dir`.
pub fn load_sound_cmds(dir: &Path) -> Vec<AudioCmd> {
    SoundKind::ALL
        .iter()
        .map(|kind| AudioCmd::LoadFx {
            id: kind.fx_id().to_string(),
            path: dir.join(kind.file_name()).display().to_string(),
        })
        .collect()
}

/// Entry point of the dedicated audio thread.
///
/// Blocks on the command channel until [`AudioCmd::Shutdown`] arrives or
/// every sender is gone.
/// If the audio device cannot be opened, every load is answered with
/// [`AudioMessage::FxLoadFailed`] so the machine keeps running silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("failed to initialise audio device: {}", e);
            run_silent(rx_cmd, tx_msg, e.to_string());
            return;
        }
    };

    info!(
        "audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), sound);
                    let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                        id,
                        error: format!("{}: {}", path, e),
                    });
                }
            },
            AudioCmd::PlayFx { id } => {
                if let Some(sound) = sounds.get(&id) {
                    debug!("fx play id='{}'", id);
                    sound.play();
                } else {
                    let _ = tx_msg.send(AudioMessage::FxPlayFailed { id });
                }
            }
            AudioCmd::Shutdown => {
                info!("audio shutdown requested");
                break;
            }
        }
    }

    // sounds drop before `audio`
    drop(sounds);
    info!("audio thread exiting");
}

/// Answer commands without a device until shutdown.
fn run_silent(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>, reason: String) {
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, .. } => {
                let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                    id,
                    error: reason.clone(),
                });
            }
            AudioCmd::PlayFx { .. } => {}
            AudioCmd::Shutdown => break,
        }
    }
}
