//! Sliding-tile title.
//!
//! Key-downs only queue a direction. The board moves on fixed logic steps,
//! slower than the frame rate, one queued direction per step.

use crate::core::MergeGame;
use crate::term::{MergeView, PixelBuffer, View};
use crate::title::{lifecycle, KeyEffect, Lifecycle, Title};
use crate::types::{Direction, KeyInput, Status, TitleKind, MERGE_CPS, MERGE_FPS};

/// Directions are queued on key-down and consumed at [`MERGE_CPS`] steps per second.
#[derive(Debug, Clone)]
pub struct MergeTitle {
    game: MergeGame,
    view: MergeView,
    step_timer_us: u64,
}

const STEP_US: u64 = 1_000_000 / MERGE_CPS as u64;

impl MergeTitle {
    pub fn new(seed: u32) -> Self {
        Self::from_game(MergeGame::new(seed))
    }

    pub fn from_game(game: MergeGame) -> Self {
        Self {
            game,
            view: MergeView,
            step_timer_us: 0,
        }
    }

    pub fn game(&self) -> &MergeGame {
        &self.game
    }
}

impl Title for MergeTitle {
    fn kind(&self) -> TitleKind {
        TitleKind::Merge
    }

    fn fps(&self) -> u32 {
        MERGE_FPS
    }

    fn screen_size(&self) -> (u16, u16) {
        self.view.size()
    }

    fn handle_key(&mut self, input: KeyInput) -> KeyEffect {
        if !input.is_down {
            return KeyEffect::Ignored;
        }
        match lifecycle(input.key) {
            Some(Lifecycle::Exit) => {
                self.game.exit();
                return KeyEffect::Exited;
            }
            Some(Lifecycle::Restart) => {
                self.game.restart();
                self.step_timer_us = 0;
                return KeyEffect::Restarted;
            }
            None => {}
        }
        match Direction::from_key(input.key) {
            Some(dir) if self.game.enqueue(dir) => KeyEffect::Handled,
            _ => KeyEffect::Ignored,
        }
    }

    fn advance(&mut self, frame_us: u64) {
        self.step_timer_us += frame_us;
        while self.step_timer_us >= STEP_US {
            self.step_timer_us -= STEP_US;
            let _ = self.game.step();
        }
    }

    fn render(&self, fb: &mut PixelBuffer) {
        self.view.render_into(&self.game, fb);
    }

    fn status(&self) -> Status {
        self.game.status()
    }

    fn score(&self) -> u32 {
        self.game.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;

    #[test]
    fn queued_moves_wait_for_a_logic_step() {
        let game = MergeGame::with_tiles([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 9);
        let mut title = MergeTitle::from_game(game);
        assert_eq!(title.handle_key(KeyInput::down(Key::A)), KeyEffect::Handled);
        assert_eq!(title.game().pending(), 1);

        title.advance(STEP_US - 1);
        assert_eq!(title.game().tile(0, 0), Some(2));
        title.advance(1);
        assert_eq!(title.game().tile(0, 0), Some(4));
        assert_eq!(title.score(), 4);
        assert_eq!(title.game().pending(), 0);
    }

    #[test]
    fn restart_clears_score_and_queue() {
        let game = MergeGame::with_tiles([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 9);
        let mut title = MergeTitle::from_game(game);
        title.handle_key(KeyInput::down(Key::Left));
        title.advance(STEP_US);
        title.handle_key(KeyInput::down(Key::Right));
        assert_eq!(title.handle_key(KeyInput::down(Key::R)), KeyEffect::Restarted);
        assert_eq!(title.score(), 0);
        assert_eq!(title.game().pending(), 0);
        assert_eq!(title.status(), Status::Playing);
    }
}
