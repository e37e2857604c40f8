//! Falling-block title: shift, rotate and drop keys over gravity driven by
//! elapsed frame time.

use crate::core::BlocksGame;
use crate::term::{BlocksView, PixelBuffer, View};
use crate::title::{lifecycle, KeyEffect, Lifecycle, Title};
use crate::types::{Key, KeyInput, Status, TitleKind, BLOCKS_FPS};

/// Left/A and Right/D shift, Up/W rotates, Down/S soft-drops, Space hard-drops.
#[derive(Debug, Clone)]
pub struct BlocksTitle {
    game: BlocksGame,
    view: BlocksView,
}

impl BlocksTitle {
    pub fn new(seed: u32) -> Self {
        Self {
            game: BlocksGame::new(seed),
            view: BlocksView::default(),
        }
    }

    pub fn game(&self) -> &BlocksGame {
        &self.game
    }
}

impl Title for BlocksTitle {
    fn kind(&self) -> TitleKind {
        TitleKind::Blocks
    }

    fn fps(&self) -> u32 {
        BLOCKS_FPS
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
        let acted = match input.key {
            Key::Left | Key::A => self.game.try_move(-1, 0, 0),
            Key::Right | Key::D => self.game.try_move(1, 0, 0),
            Key::Up | Key::W => self.game.try_move(0, 0, 1),
            Key::Down | Key::S => {
                self.game.soft_drop();
                true
            }
            Key::Space => self.game.hard_drop().is_some(),
            _ => false,
        };
        if acted {
            KeyEffect::Handled
        } else {
            KeyEffect::Ignored
        }
    }

    fn advance(&mut self, frame_us: u64) {
        self.game.tick(frame_us);
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
