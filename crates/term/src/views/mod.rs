//! Views: map each title's state into a pixel buffer.
//!
//! Views are pure (no I/O) and repaint the whole frame every call, so they can
//! be unit-tested against a plain [`PixelBuffer`].

mod blocks;
mod flappy;
mod merge;
mod mines;
mod pushbox;

pub use blocks::BlocksView;
pub use flappy::FlappyView;
pub use merge::MergeView;
pub use mines::MinesView;
pub use pushbox::PushboxView;

use crate::draw::{darken, draw_text_centered, text_height};
use crate::fb::PixelBuffer;
use crate::types::Pixel;

/// Renders one title's state at a fixed logical resolution.
pub trait View {
    type State;

    /// Logical frame size in pixels
    fn size(&self) -> (u16, u16);

    fn render_into(&self, state: &Self::State, fb: &mut PixelBuffer);

    /// Size `fb` for this view, keeping its allocation when it already fits.
    fn prepare(&self, fb: &mut PixelBuffer) {
        let (w, h) = self.size();
        if fb.width() != w || fb.height() != h {
            fb.resize(w, h);
        }
    }
}

/// Dim the frame and stack centred lines of text over it.
pub(crate) fn banner(fb: &mut PixelBuffer, lines: &[(&str, i32, Pixel)]) {
    darken(fb, 3, 10);
    let gap = 4;
    let total: i32 = lines.iter().map(|&(_, s, _)| text_height(s) + gap).sum::<i32>() - gap;
    let cx = fb.width() as i32 / 2;
    let mut y = (fb.height() as i32 - total) / 2;
    for &(text, scale, color) in lines {
        draw_text_centered(fb, cx, y, text, scale, color);
        y += text_height(scale) + gap;
    }
}
