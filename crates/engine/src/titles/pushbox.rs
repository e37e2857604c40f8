//! Push-puzzle title.

use crate::core::PushboxGame;
use crate::term::{PixelBuffer, PushboxView, View};
use crate::title::{lifecycle, KeyEffect, Lifecycle, Title};
use crate::types::{Direction, KeyInput, Status, TitleKind, PUSHBOX_FPS};

/// Turn-based: each key-down is one move. Ticks only drive redraws.
#[derive(Debug, Clone)]
pub struct PushboxTitle {
    game: PushboxGame,
    view: PushboxView,
}

impl PushboxTitle {
    pub fn new() -> Self {
        Self::from_game(PushboxGame::new())
    }

    pub fn from_game(game: PushboxGame) -> Self {
        Self {
            game,
            view: PushboxView,
        }
    }

    pub fn game(&self) -> &PushboxGame {
        &self.game
    }
}

impl Default for PushboxTitle {
    fn default() -> Self {
        Self::new()
    }
}

impl Title for PushboxTitle {
    fn kind(&self) -> TitleKind {
        TitleKind::Pushbox
    }

    fn fps(&self) -> u32 {
        PUSHBOX_FPS
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
        match Direction::from_key(input.key) {
            Some(dir) if self.game.status() == Status::Playing => {
                self.game.step(dir);
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
        self.game.moves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Overlay;
    use crate::types::Key;

    #[test]
    fn pushing_the_last_box_wins() {
        let rows = [
            "##########",
            "#@$.     #",
            "#        #",
            "#        #",
            "#        #",
            "#        #",
            "#        #",
            "#        #",
            "#        #",
            "##########",
        ];
        let game = PushboxGame::from_rows(&rows).unwrap();
        let mut title = PushboxTitle::from_game(game);
        assert_eq!(title.handle_key(KeyInput::down(Key::D)), KeyEffect::Handled);
        assert_eq!(title.status(), Status::Won);
        assert_eq!(title.score(), 1);
        assert_eq!(title.game().overlay(3, 1), Some(Overlay::Box));
    }

    #[test]
    fn restart_restores_the_level() {
        let mut title = PushboxTitle::new();
        let start = title.game().player();
        title.handle_key(KeyInput::down(Key::S));
        assert_eq!(title.score(), 1);
        assert_eq!(title.handle_key(KeyInput::down(Key::R)), KeyEffect::Restarted);
        assert_eq!(title.game().player(), start);
        assert_eq!(title.score(), 0);
    }
}
