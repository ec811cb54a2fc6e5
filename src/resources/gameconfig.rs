//! Machine configuration resource.
//!
//! Settings come from an INI file; every key is optional and falls back to
//! the built-in default. The file layout mirrors the three setting groups:
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//! fullscreen = false
//!
//! [dispense]
//! corner_ms = 500
//! settle_ms = 1500
//!
//! [assets]
//! sounds = ./assets/sounds
//! images = ./assets/images
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::{info, warn};

use crate::resources::dispenser::DispenseTiming;

pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Longest accepted `[dispense]` duration.
pub const MAX_DISPENSE_MS: u32 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_fps: 120,
            vsync: true,
            fullscreen: false,
        }
    }
}

/// Where sound effects and result images are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub sounds: PathBuf,
    pub images: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            sounds: PathBuf::from("./assets/sounds"),
            images: PathBuf::from("./assets/images"),
        }
    }
}

/// Machine configuration resource.
///
/// [`apply_gameconfig_changes`] pushes the window group to raylib whenever
/// this resource changes.
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub dispense: DispenseTiming,
    pub assets: AssetPaths,
    /// File the configuration is loaded from and saved to.
    pub path: PathBuf,
}

fn read_u32(ini: &Ini, section: &str, key: &str, target: &mut u32) {
    if let Ok(Some(v)) = ini.getuint(section, key) {
        *target = u32::try_from(v).unwrap_or(u32::MAX);
    }
}

fn read_ms(ini: &Ini, section: &str, key: &str, target: &mut u32) {
    let mut ms = *target;
    read_u32(ini, section, key, &mut ms);
    if ms > MAX_DISPENSE_MS {
        warn!(
            "[{}] {} = {} is too long, using {}",
            section, key, ms, MAX_DISPENSE_MS
        );
        ms = MAX_DISPENSE_MS;
    }
    *target = ms;
}

fn read_bool(ini: &Ini, section: &str, key: &str, target: &mut bool) {
    if let Ok(Some(v)) = ini.getbool(section, key) {
        *target = v;
    }
}

fn read_path(ini: &Ini, section: &str, key: &str, target: &mut PathBuf) {
    if let Some(v) = ini.get(section, key) {
        *target = PathBuf::from(v);
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            window: WindowSettings::default(),
            dispense: DispenseTiming::default(),
            assets: AssetPaths::default(),
            path: path.into(),
        }
    }

    /// Overlay the values present in `ini` onto this configuration.
    pub fn apply_ini(&mut self, ini: &Ini) {
        let w = &mut self.window;
        read_u32(ini, "window", "width", &mut w.width);
        read_u32(ini, "window", "height", &mut w.height);
        read_u32(ini, "window", "target_fps", &mut w.target_fps);
        read_bool(ini, "window", "vsync", &mut w.vsync);
        read_bool(ini, "window", "fullscreen", &mut w.fullscreen);

        read_ms(ini, "dispense", "corner_ms", &mut self.dispense.corner_ms);
        read_ms(ini, "dispense", "settle_ms", &mut self.dispense.settle_ms);

        read_path(ini, "assets", "sounds", &mut self.assets.sounds);
        read_path(ini, "assets", "images", &mut self.assets.images);
    }

    /// The configuration as INI sections.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        let w = &self.window;
        for (key, value) in [
            ("width", w.width.to_string()),
            ("height", w.height.to_string()),
            ("target_fps", w.target_fps.to_string()),
            ("vsync", w.vsync.to_string()),
            ("fullscreen", w.fullscreen.to_string()),
        ] {
            ini.set("window", key, Some(value));
        }
        ini.set("dispense", "corner_ms", Some(self.dispense.corner_ms.to_string()));
        ini.set("dispense", "settle_ms", Some(self.dispense.settle_ms.to_string()));
        ini.set("assets", "sounds", Some(self.assets.sounds.display().to_string()));
        ini.set("assets", "images", Some(self.assets.images.display().to_string()));
        ini
    }

    /// Load `self.path`. On error nothing is changed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.path)
            .map_err(|e| format!("cannot read config '{}': {}", self.path.display(), e))?;
        self.apply_ini(&ini);
        info!(
            "config loaded from '{}': {}x{} @{}fps, corner {}ms, settle {}ms",
            self.path.display(),
            self.window.width,
            self.window.height,
            self.window.target_fps,
            self.dispense.corner_ms,
            self.dispense.settle_ms
        );
        Ok(())
    }

    /// Write the configuration to `self.path`, creating the file if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.path)
            .map_err(|e| format!("cannot write config '{}': {}", self.path.display(), e))?;
        info!("config saved to '{}'", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::dispenser::{DEFAULT_CORNER_MS, DEFAULT_SETTLE_MS};

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("emojivend_{}_{}.ini", name, std::process::id()))
    }

    fn parse(text: &str) -> Ini {
        let mut ini = Ini::new();
        ini.read(text.to_string()).unwrap();
        ini
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window, WindowSettings::default());
        assert_eq!(config.window.target_fps, 120);
        assert_eq!(config.dispense.corner_ms, DEFAULT_CORNER_MS);
        assert_eq!(config.dispense.settle_ms, DEFAULT_SETTLE_MS);
        assert_eq!(config.path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_partial_ini_keeps_other_defaults() {
        let mut config = GameConfig::new();
        config.apply_ini(&parse("[dispense]\nsettle_ms = 250\n[window]\ntarget_fps = 30\n"));
        assert_eq!(config.dispense.settle_ms, 250);
        assert_eq!(config.dispense.corner_ms, DEFAULT_CORNER_MS);
        assert_eq!(config.window.target_fps, 30);
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.assets, AssetPaths::default());
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let mut config = GameConfig::new();
        config.apply_ini(&parse("[window]\nwidth = wide\nvsync = maybe\n"));
        assert_eq!(config.window, WindowSettings::default());
    }

    #[test]
    fn test_dispense_durations_are_capped() {
        let mut config = GameConfig::new();
        config.apply_ini(&parse(
            "[dispense]\ncorner_ms = 4294967295\nsettle_ms = 99999999999\n",
        ));
        assert_eq!(config.dispense.corner_ms, MAX_DISPENSE_MS);
        assert_eq!(config.dispense.settle_ms, MAX_DISPENSE_MS);

        config.apply_ini(&parse("[dispense]\ncorner_ms = 800\n"));
        assert_eq!(config.dispense.corner_ms, 800);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window, WindowSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("save");
        let mut config = GameConfig::with_path(&path);
        config.window.width = 800;
        config.window.fullscreen = true;
        config.dispense.corner_ms = 400;
        config.assets.images = PathBuf::from("pics");
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window, config.window);
        assert_eq!(loaded.dispense, config.dispense);
        assert_eq!(loaded.assets, config.assets);

        let _ = std::fs::remove_file(&path);
    }
}
