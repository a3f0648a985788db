//! Render seam
//!
//! Front ends implement `Renderer` to draw a `Snapshot`. Drawing never feeds
//! back into the simulation.

use crate::sim::Snapshot;

/// Draws one frame
pub trait Renderer {
    fn draw(&mut self, frame: &Snapshot);
}

/// HUD text lines shown in the top-left corner
pub fn hud_lines(frame: &Snapshot) -> [String; 2] {
    [
        format!("Score: {}", frame.score),
        format!("Lives: {}", frame.player.lives),
    ]
}

/// Headless renderer that writes the HUD to the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_hud: Option<[String; 2]>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Snapshot) {
        self.frames += 1;
        let hud = hud_lines(frame);
        log::trace!(
            "frame {}: {} | {} | {} sprites",
            self.frames,
            hud[0],
            hud[1],
            frame.sprites.len()
        );
        if self.last_hud.as_ref() != Some(&hud) {
            log::debug!("{} | {}", hud[0], hud[1]);
            self.last_hud = Some(hud);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_hud_lines() {
        let mut state = GameState::new(1, 0);
        state.score = 12;
        state.player.lives = 2;
        let frame = Snapshot::capture(&state);
        assert_eq!(hud_lines(&frame), ["Score: 12".to_string(), "Lives: 2".to_string()]);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let frame = Snapshot::capture(&GameState::new(1, 0));
        let mut renderer = LogRenderer::new();
        renderer.draw(&frame);
        renderer.draw(&frame);
        assert_eq!(renderer.frames(), 2);
    }
}
