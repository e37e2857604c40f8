//! The seam between the runner and a game.
//!
//! A title owns its state aggregate and its view. The runner feeds it key
//! transitions, advances it one fixed tick at a time, and asks it to paint.

use crate::term::PixelBuffer;
use crate::titles::{BlocksTitle, FlappyTitle, MergeTitle, MinesTitle, PushboxTitle};
use crate::types::{Key, KeyInput, Status, TitleKind};

/// What a key transition did to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEffect {
    Ignored,
    Handled,
    Restarted,
    Exited,
}

pub trait Title {
    fn kind(&self) -> TitleKind;

    fn fps(&self) -> u32;

    /// Logical frame size in pixels
    fn screen_size(&self) -> (u16, u16);

    fn handle_key(&mut self, input: KeyInput) -> KeyEffect;

    /// One fixed tick of `frame_us` microseconds.
    fn advance(&mut self, frame_us: u64);

    fn render(&self, fb: &mut PixelBuffer);

    fn status(&self) -> Status;

    fn score(&self) -> u32;
}

/// Keys every title treats the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Exit,
    Restart,
}

/// Q/Escape exit, R restarts.
pub(crate) fn lifecycle(key: Key) -> Option<Lifecycle> {
    match key {
        Key::Q | Key::Escape => Some(Lifecycle::Exit),
        Key::R => Some(Lifecycle::Restart),
        _ => None,
    }
}

/// Build a title by id
pub fn make_title(kind: TitleKind, seed: u32) -> Box<dyn Title> {
    match kind {
        TitleKind::Merge => Box::new(MergeTitle::new(seed)),
        TitleKind::Blocks => Box::new(BlocksTitle::new(seed)),
        TitleKind::Flappy => Box::new(FlappyTitle::new(seed)),
        TitleKind::Pushbox => Box::new(PushboxTitle::new()),
        TitleKind::Mines => Box::new(MinesTitle::new(seed)),
    }
}
