//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file. Missing fields take their
//! defaults, so older or hand-written files keep loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_NAME, TICK_HZ};
use crate::persistence;

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "pixel_jumper_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded in the high score table
    pub player_name: String,
    /// Where the high score table lives
    pub highscore_path: PathBuf,
    /// Spawner seed; `None` picks one from the clock at start
    pub seed: Option<u64>,
    /// Simulation rate
    pub tick_rate_hz: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: PLAYER_NAME.to_string(),
            highscore_path: PathBuf::from("highscores.json"),
            seed: None,
            tick_rate_hz: TICK_HZ,

            master_volume: 0.8,
            music_volume: 0.5,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match persistence::read_json::<Settings>(path) {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        persistence::write_json(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Clamp out-of-range values from hand-edited files
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if self.tick_rate_hz == 0 {
            self.tick_rate_hz = TICK_HZ;
        }
        self
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Effective SFX volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }
}
