//! Sliding-tile board: score header over a 4x4 grid of colored tiles.

use crate::core::MergeGame;
use crate::draw::{draw_text, draw_text_centered, text_width};
use crate::fb::PixelBuffer;
use crate::text;
use crate::types::{Pixel, Status, MERGE_SIZE};

use super::{banner, View};

const BG: Pixel = 0x00bb_ada0;
const TEXT_DARK: Pixel = 0x0077_6e65;
const TEXT_LIGHT: Pixel = 0x00f9_f6f2;
const EMPTY: Pixel = 0x00cc_c0b3;

/// Tile colors for 2, 4, ... 2048; larger values reuse the last entry.
const TILE_COLORS: [Pixel; 11] = [
    0x00ee_e4da,
    0x00ed_e0c8,
    0x00f2_b179,
    0x00f5_9563,
    0x00f6_7c5f,
    0x00f6_5e3b,
    0x00ed_cf72,
    0x00ed_cc61,
    0x00ed_c850,
    0x00ed_c53f,
    0x00ed_c22e,
];

const TILE: i32 = 18;
const GAP: i32 = 2;
const HEADER: i32 = 10;
const N: i32 = MERGE_SIZE as i32;

pub const WIDTH: u16 = (GAP + N * (TILE + GAP)) as u16;
pub const HEIGHT: u16 = (HEADER + GAP + N * (TILE + GAP)) as u16;

pub fn tile_color(value: u32) -> Pixel {
    if value == 0 {
        return EMPTY;
    }
    debug_assert!(value.is_power_of_two(), "tile {value} is not a power of two");
    let i = (value.trailing_zeros() as usize).saturating_sub(1);
    TILE_COLORS[i.min(TILE_COLORS.len() - 1)]
}

fn text_color(value: u32) -> Pixel {
    if value <= 4 {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeView;

impl MergeView {
    /// Top-left pixel of board cell `(x, y)`
    pub fn tile_origin(x: i32, y: i32) -> (i32, i32) {
        (GAP + x * (TILE + GAP), HEADER + GAP + y * (TILE + GAP))
    }
}

impl View for MergeView {
    type State = MergeGame;

    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn render_into(&self, game: &MergeGame, fb: &mut PixelBuffer) {
        self.prepare(fb);
        fb.clear(BG);

        draw_text(fb, GAP, 2, "SCORE", 1, TEXT_DARK);
        let score = text!("{}", game.score());
        let w = text_width(score.as_str(), 1);
        draw_text(fb, WIDTH as i32 - GAP - w, 2, score.as_str(), 1, TEXT_LIGHT);

        for (y, row) in game.rows().iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let (px, py) = Self::tile_origin(x as i32, y as i32);
                fb.fill_rect(px, py, TILE, TILE, tile_color(value));
                if value > 0 {
                    let label = text!("{}", value);
                    draw_text_centered(
                        fb,
                        px + TILE / 2,
                        py + (TILE - 5) / 2,
                        label.as_str(),
                        1,
                        text_color(value),
                    );
                }
            }
        }

        match game.status() {
            Status::Won => banner(fb, &[("YOU WIN", 1, TEXT_LIGHT), ("R RESTART", 1, TEXT_LIGHT)]),
            Status::Lost => banner(fb, &[("GAME OVER", 1, TEXT_LIGHT), ("R RESTART", 1, TEXT_LIGHT)]),
            Status::Playing | Status::Exited => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_colors_follow_powers_of_two() {
        assert_eq!(tile_color(0), EMPTY);
        assert_eq!(tile_color(2), TILE_COLORS[0]);
        assert_eq!(tile_color(2048), TILE_COLORS[10]);
        assert_eq!(tile_color(8192), TILE_COLORS[10]);
    }

    #[test]
    fn renders_tiles_at_their_cells() {
        let game = MergeGame::with_tiles([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]], 1);
        let view = MergeView;
        let mut fb = PixelBuffer::new(1, 1);
        view.render_into(&game, &mut fb);
        assert_eq!((fb.width(), fb.height()), (WIDTH, HEIGHT));

        let (x0, y0) = MergeView::tile_origin(0, 0);
        assert_eq!(fb.get(x0, y0), Some(tile_color(2)));
        let (x1, y1) = MergeView::tile_origin(1, 0);
        assert_eq!(fb.get(x1, y1), Some(EMPTY));
        let (x3, y3) = MergeView::tile_origin(3, 3);
        assert_eq!(fb.get(x3, y3), Some(tile_color(4)));
        assert_eq!(fb.get(0, HEIGHT as i32 - 1), Some(BG));
    }
}
