//! Mine-sweeper title: cursor movement, reveal and flag keys.

use crate::core::MinesGame;
use crate::term::{MinesView, PixelBuffer, View};
use crate::title::{lifecycle, KeyEffect, Lifecycle, Title};
use crate::types::{Direction, Key, KeyInput, Status, TitleKind, MINES_FPS};

/// Arrows/WASD move the cursor, Space reveals, F flags.
#[derive(Debug, Clone)]
pub struct MinesTitle {
    game: MinesGame,
    view: MinesView,
}

impl MinesTitle {
    pub fn new(seed: u32) -> Self {
        Self::from_game(MinesGame::new(seed))
    }

    pub fn from_game(game: MinesGame) -> Self {
        Self {
            game,
            view: MinesView,
        }
    }

    pub fn game(&self) -> &MinesGame {
        &self.game
    }
}

impl Title for MinesTitle {
    fn kind(&self) -> TitleKind {
        TitleKind::Mines
    }

    fn fps(&self) -> u32 {
        MINES_FPS
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
                return KeyEffect::Restarted;
            }
            None => {}
        }
        if self.game.status() != Status::Playing {
            return KeyEffect::Ignored;
        }
        if let Some(dir) = Direction::from_key(input.key) {
            self.game.move_cursor(dir);
            return KeyEffect::Handled;
        }
        match input.key {
            Key::Space => {
                self.game.reveal_at_cursor();
                KeyEffect::Handled
            }
            Key::F => {
                self.game.toggle_flag_at_cursor();
                KeyEffect::Handled
            }
            _ => KeyEffect::Ignored,
        }
    }

    fn advance(&mut self, _frame_us: u64) {}

    fn render(&self, fb: &mut PixelBuffer) {
        self.view.render_into(&self.game, fb);
    }

    fn status(&self) -> Status {
        self.game.status()
    }

    fn score(&self) -> u32 {
        self.game.revealed_count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_flag_and_reveal() {
        let mut title = MinesTitle::from_game(MinesGame::with_mines(&[(7, 8)]));
        title.handle_key(KeyInput::down(Key::Left));
        assert_eq!(title.game().cursor(), (7, 8));
        title.handle_key(KeyInput::down(Key::F));
        assert_eq!(title.game().flagged_count(), 1);
        // single mine flagged correctly
        assert_eq!(title.status(), Status::Won);
    }

    #[test]
    fn revealing_a_mine_loses() {
        let mut title = MinesTitle::from_game(MinesGame::with_mines(&[(8, 8)]));
        title.handle_key(KeyInput::down(Key::Space));
        assert_eq!(title.status(), Status::Lost);
        assert_eq!(title.handle_key(KeyInput::down(Key::Space)), KeyEffect::Ignored);
        assert_eq!(title.handle_key(KeyInput::down(Key::R)), KeyEffect::Restarted);
        assert_eq!(title.status(), Status::Playing);
    }
}
