//! Messages exchanged with the background audio thread.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxPlayFailed { id: String },
}

/// The machine's sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Cancel,
    Check,
    Emoji,
}

impl SoundKind {
    pub const ALL: [SoundKind; 3] = [SoundKind::Cancel, SoundKind::Check, SoundKind::Emoji];

    /// Id the effect is registered under on the audio thread.
    pub fn fx_id(self) -> &'static str {
        match self {
            SoundKind::Cancel => "cancel",
            SoundKind::Check => "check",
            SoundKind::Emoji => "emoji",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            SoundKind::Cancel => "gen_cancel.wav",
            SoundKind::Check => "gen_check.wav",
            SoundKind::Emoji => "gen_emoji.wav",
        }
    }
}
