//! Session controller
//!
//! Drives one playthrough: samples input and time from the caller, advances
//! the simulation, forwards audio triggers and writes the final score to the
//! high score store when the run ends by death or by reaching the goal.

use anyhow::{Context, Result};

use crate::audio::{AudioSink, SoundEffect};
use crate::consts::PLAYER_NAME;
use crate::highscores::ScoreStore;
use crate::sim::{self, EndReason, GameEvent, GameState, Snapshot, TickInput};

/// Result of one `Session::tick`
#[derive(Debug, Clone)]
pub struct TickReport {
    pub still_running: bool,
    pub score: u64,
    pub lives: u32,
    /// Frame to hand to the renderer
    pub snapshot: Snapshot,
    /// What happened during the tick
    pub events: Vec<GameEvent>,
}

/// One playthrough. A finished session stays finished; start a new one to play again.
pub struct Session<S: ScoreStore> {
    state: GameState,
    store: S,
    audio: Box<dyn AudioSink>,
    player_name: String,
    persisted: bool,
}

impl<S: ScoreStore> Session<S> {
    /// Start a session at session clock `now` and kick off the music
    pub fn start(seed: u64, now: u64, store: S, mut audio: Box<dyn AudioSink>) -> Self {
        log::info!("Starting session with seed {}", seed);
        audio.play(SoundEffect::BackgroundMusic);
        Self {
            state: GameState::new(seed, now),
            store,
            audio,
            player_name: PLAYER_NAME.to_string(),
            persisted: false,
        }
    }

    /// Name recorded with the final score
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Advance to session clock `now`.
    ///
    /// Fails only if the final score could not be written.
    pub fn tick(&mut self, now: u64, input: &TickInput) -> Result<TickReport> {
        let events = sim::tick(&mut self.state, input, now);

        for event in &events {
            match event {
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::Ended(reason) => self.finish(*reason)?,
                _ => {}
            }
        }

        Ok(TickReport {
            still_running: self.state.is_running(),
            score: self.state.score,
            lives: self.state.player.lives,
            snapshot: Snapshot::capture(&self.state),
            events,
        })
    }

    fn finish(&mut self, reason: EndReason) -> Result<()> {
        let score = self.state.score;
        log::info!(
            "Session ended ({}) with score {} after {} ticks",
            reason.as_str(),
            score,
            self.state.time_ticks
        );
        if reason.persists_score() && !self.persisted {
            self.store
                .save(&self.player_name, score)
                .with_context(|| format!("failed to record score {} for {}", score, self.player_name))?;
            self.persisted = true;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.state.end_reason()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Whether the final score has been written to the store
    pub fn score_persisted(&self) -> bool {
        self.persisted
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
