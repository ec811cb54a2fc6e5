//! Result images keyed by emoji.
//!
//! Loaded once at startup from the configured image directory. A missing or
//! unreadable image leaves its slot empty; the modal then draws a placeholder.

use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;

use crate::components::emoji::{EMOJI_COUNT, Emoji};

/// Non-send store of result textures (GPU handles stay on the main thread).
#[derive(Default)]
pub struct EmojiTextures {
    textures: [Option<Texture2D>; EMOJI_COUNT],
}

impl EmojiTextures {
    /// Load `<dir>/<emoji id>.png` for every emoji.
    pub fn load(rl: &mut RaylibHandle, th: &RaylibThread, dir: &Path) -> Self {
        let mut store = Self::default();
        for emoji in Emoji::ALL {
            let path = dir.join(emoji.image_file());
            match load_texture(rl, th, &path) {
                Ok(texture) => {
                    info!("loaded result image '{}'", path.display());
                    store.textures[emoji.index()] = Some(texture);
                }
                Err(e) => warn!("{}", e),
            }
        }
        store
    }

    pub fn get(&self, emoji: Emoji) -> Option<&Texture2D> {
        self.textures[emoji.index()].as_ref()
    }
}

fn load_texture(rl: &mut RaylibHandle, th: &RaylibThread, path: &Path) -> Result<Texture2D, String> {
    let path_str = path
        .to_str()
        .ok_or_else(|| format!("image path '{}' is not valid UTF-8", path.display()))?;
    rl.load_texture(th, path_str)
        .map_err(|e| format!("failed to load image '{}': {}", path.display(), e))
}
