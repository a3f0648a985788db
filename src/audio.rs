//! Audio trigger seam
//!
//! The simulation only emits triggers; the front end owns the output device.
//! A missing sound asset degrades to silence and never affects gameplay.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Looping music, started with the session
    BackgroundMusic,
}

impl SoundEffect {
    /// Asset file relative to the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::BackgroundMusic => "background_music.mp3",
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::BackgroundMusic)
    }
}

/// Receives audio triggers. No feedback into the simulation.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    sound_dir: PathBuf,
    music_volume: f32,
    sfx_volume: f32,
    /// Effects already reported missing, so the warning is logged once
    missing: HashSet<SoundEffect>,
    played: u32,
}

impl AudioManager {
    pub fn new(sound_dir: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self {
            sound_dir: sound_dir.into(),
            music_volume: settings.effective_music_volume(),
            sfx_volume: settings.effective_sfx_volume(),
            missing: HashSet::new(),
            played: 0,
        }
    }

    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }

    /// Triggers that reached an asset
    pub fn played(&self) -> u32 {
        self.played
    }

    /// Effective volume for an effect
    fn volume_for(&self, effect: SoundEffect) -> f32 {
        if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.volume_for(effect);
        if vol <= 0.0 {
            return;
        }

        let asset = self.sound_dir.join(effect.file_name());
        if !asset.is_file() {
            if self.missing.insert(effect) {
                log::warn!(
                    "Sound {} not found, continuing without it",
                    asset.display()
                );
            }
            return;
        }

        log::debug!("Playing {:?} at volume {:.2}", effect, vol);
        self.played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let mut audio = AudioManager::new(dir.path(), &Settings::default());
        audio.play(SoundEffect::Jump);
        audio.play(SoundEffect::Jump);
        assert_eq!(audio.played(), 0);
        assert!(audio.missing.contains(&SoundEffect::Jump));
    }

    #[test]
    fn test_present_asset_plays() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jump.wav"), b"RIFF").unwrap();
        let mut audio = AudioManager::new(dir.path(), &Settings::default());
        audio.play(SoundEffect::Jump);
        audio.play(SoundEffect::BackgroundMusic);
        assert_eq!(audio.played(), 1);
    }

    #[test]
    fn test_muted_skips_everything() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jump.wav"), b"RIFF").unwrap();
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(dir.path(), &settings);
        audio.play(SoundEffect::Jump);
        assert_eq!(audio.played(), 0);
        assert!(audio.missing.is_empty());
    }
}
