//! Mine-sweeper field with counters and a cursor outline.

use crate::core::MinesGame;
use crate::draw::{border, draw_glyph, draw_icon, draw_text, text_width};
use crate::fb::PixelBuffer;
use crate::font::{glyph, FLAG_ICON, MINE_ICON};
use crate::text;
use crate::types::{Pixel, Status, MINES_SIZE};

use super::{banner, View};

const HIDDEN: Pixel = 0x0040_4040;
const FLAGGED: Pixel = 0x00a9_a9a9;
const OPEN: Pixel = 0x00d3_d3d3;
const MINE: Pixel = 0x00ff_0000;
const INK: Pixel = 0x0000_0000;
const FLAG: Pixel = 0x00ff_0000;
const CURSOR: Pixel = 0x00ff_ffff;
const WHITE: Pixel = 0x00ff_ffff;
const GREEN: Pixel = 0x0000_ff00;
const MAGENTA: Pixel = 0x00ff_00ff;

/// Digit colors for 1..=8 adjacent mines
const NUMBER_COLORS: [Pixel; 8] = [
    0x0000_00ff,
    0x0000_ff00,
    0x00ff_ff00,
    0x00ff_00ff,
    0x00ff_a500,
    0x0080_8000,
    0x0080_0080,
    0x0000_8080,
];

/// One cell pitch; the last row and column of each are a grid line.
const TILE: i32 = 6;
const HEADER: i32 = 8;
const N: i32 = MINES_SIZE as i32;

pub const WIDTH: u16 = (N * TILE) as u16;
pub const HEIGHT: u16 = (HEADER + N * TILE) as u16;

pub fn number_color(adjacent: u8) -> Pixel {
    debug_assert!(adjacent <= 8, "{adjacent} adjacent mines");
    match adjacent {
        1..=8 => NUMBER_COLORS[adjacent as usize - 1],
        _ => OPEN,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinesView;

impl MinesView {
    pub fn tile_origin(x: i32, y: i32) -> (i32, i32) {
        (x * TILE, HEADER + y * TILE)
    }
}

impl View for MinesView {
    type State = MinesGame;

    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn render_into(&self, game: &MinesGame, fb: &mut PixelBuffer) {
        self.prepare(fb);
        fb.clear(INK);

        draw_text(fb, 1, 1, text!("MINES {}", game.mine_total()).as_str(), 1, WHITE);
        let flags = text!("FLAGS {}", game.flagged_count());
        let w = text_width(flags.as_str(), 1);
        draw_text(fb, WIDTH as i32 - 1 - w, 1, flags.as_str(), 1, WHITE);

        let inner = TILE - 1;
        for y in 0..N {
            for x in 0..N {
                let Some(cell) = game.cell(x, y) else {
                    continue;
                };
                let (px, py) = Self::tile_origin(x, y);
                if cell.revealed && cell.has_mine {
                    fb.fill_rect(px, py, inner, inner, MINE);
                    draw_icon(fb, px, py, &MINE_ICON, 1, INK);
                } else if cell.revealed {
                    fb.fill_rect(px, py, inner, inner, OPEN);
                    if cell.adjacent > 0 {
                        let digit = char::from(b'0' + cell.adjacent);
                        draw_glyph(fb, px + 1, py, glyph(digit), 1, number_color(cell.adjacent));
                    }
                } else if cell.flagged {
                    fb.fill_rect(px, py, inner, inner, FLAGGED);
                    draw_icon(fb, px, py, &FLAG_ICON, 1, FLAG);
                } else {
                    fb.fill_rect(px, py, inner, inner, HIDDEN);
                }
            }
        }

        if game.status() == Status::Playing {
            let (cx, cy) = game.cursor();
            let (px, py) = Self::tile_origin(cx, cy);
            border(fb, px - 1, py - 1, TILE + 1, TILE + 1, 1, CURSOR);
        }

        match game.status() {
            Status::Won => banner(fb, &[("YOU WIN", 2, GREEN), ("R RESTART", 1, WHITE)]),
            Status::Lost => banner(fb, &[("BOOM", 2, MAGENTA), ("R RESTART", 1, WHITE)]),
            Status::Playing | Status::Exited => {}
        }
    }
}
