//! Side-scroller title: one physics tick per frame, flap on key-down.

use crate::core::FlappyGame;
use crate::term::{FlappyView, PixelBuffer, View};
use crate::title::{lifecycle, KeyEffect, Lifecycle, Title};
use crate::types::{Key, KeyInput, Status, TitleKind, FLAPPY_FPS};

/// Space, Up or W flaps. R only restarts once the bird is down.
#[derive(Debug, Clone)]
pub struct FlappyTitle {
    game: FlappyGame,
    view: FlappyView,
}

impl FlappyTitle {
    pub fn new(seed: u32) -> Self {
        let view = FlappyView::default();
        let (w, h) = view.size();
        Self {
            game: FlappyGame::new(w as i32, h as i32, seed),
            view,
        }
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut FlappyGame {
        &mut self.game
    }
}

impl Title for FlappyTitle {
    fn kind(&self) -> TitleKind {
        TitleKind::Flappy
    }

    fn fps(&self) -> u32 {
        FLAPPY_FPS
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
            Some(Lifecycle::Restart) if self.game.status() == Status::Lost => {
                self.game.restart();
                return KeyEffect::Restarted;
            }
            Some(Lifecycle::Restart) => return KeyEffect::Ignored,
            None => {}
        }
        match input.key {
            Key::Space | Key::Up | Key::W if self.game.status() == Status::Playing => {
                self.game.jump();
                KeyEffect::Handled
            }
            _ => KeyEffect::Ignored,
        }
    }

    fn advance(&mut self, _frame_us: u64) {
        self.game.tick();
    }

    fn render(&self, fb: &mut PixelBuffer) {
        self.view.render_into(&self.game, fb);
    }

    fn status(&self) -> Status {
        self.game.status()
    }

    fn score(&self) -> u32 {
        self.game.total_score()
    }
}
