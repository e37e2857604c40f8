//! Falling-block board with a side panel for the next piece and counters.

use crate::core::blocks::get_shape;
use crate::core::BlocksGame;
use crate::draw::{border, darken_pixel, draw_text};
use crate::fb::PixelBuffer;
use crate::text;
use crate::types::{PieceKind, Pixel, Rotation, Status, BOARD_HEIGHT, BOARD_WIDTH};

use super::{banner, View};

const CELL: i32 = 4;
const BOARD_X: i32 = 4;
const BOARD_Y: i32 = 4;
const PANEL_X: i32 = BOARD_X + BOARD_WIDTH as i32 * CELL + 8;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = (BOARD_Y * 2 + BOARD_HEIGHT as i32 * CELL) as u16;

const BG: Pixel = 0x0000_0000;
const FRAME: Pixel = 0x00ff_ffff;
const LABEL: Pixel = 0x00ff_ff00;
const VALUE: Pixel = 0x0000_ffff;
const OVER: Pixel = 0x00ff_0000;

pub fn piece_color(kind: PieceKind) -> Pixel {
    match kind {
        PieceKind::I => 0x0000_ffff,
        PieceKind::O => 0x00ff_ff00,
        PieceKind::T => 0x0080_00ff,
        PieceKind::L => 0x00ff_8000,
        PieceKind::J => 0x0000_00ff,
        PieceKind::S => 0x0000_ff00,
        PieceKind::Z => 0x00ff_0000,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlocksView {
    show_ghost: bool,
}

impl Default for BlocksView {
    fn default() -> Self {
        Self { show_ghost: true }
    }
}

impl BlocksView {
    pub fn new(show_ghost: bool) -> Self {
        Self { show_ghost }
    }

    /// Top-left pixel of board cell `(x, y)`
    pub fn cell_origin(x: i32, y: i32) -> (i32, i32) {
        (BOARD_X + x * CELL, BOARD_Y + y * CELL)
    }

    fn draw_cell(fb: &mut PixelBuffer, x: i32, y: i32, color: Pixel) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return;
        }
        let (px, py) = Self::cell_origin(x, y);
        fb.fill_rect(px, py, CELL, CELL, color);
    }
}

impl View for BlocksView {
    type State = BlocksGame;

    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn render_into(&self, game: &BlocksGame, fb: &mut PixelBuffer) {
        self.prepare(fb);
        fb.clear(BG);

        border(
            fb,
            BOARD_X - 2,
            BOARD_Y - 2,
            BOARD_WIDTH as i32 * CELL + 4,
            BOARD_HEIGHT as i32 * CELL + 4,
            2,
            FRAME,
        );

        for (y, row) in game.board().rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    Self::draw_cell(fb, x as i32, y as i32, piece_color(*kind));
                }
            }
        }

        if game.status() == Status::Playing {
            let piece = game.active();
            let color = piece_color(piece.kind);
            if self.show_ghost {
                let ghost_y = game.landing_y();
                let dim = darken_pixel(color, 1, 4);
                for (dx, dy) in piece.shape() {
                    Self::draw_cell(fb, piece.x + dx, ghost_y + dy, dim);
                }
            }
            for (dx, dy) in piece.shape() {
                Self::draw_cell(fb, piece.x + dx, piece.y + dy, color);
            }
        }

        // Side panel
        draw_text(fb, PANEL_X, BOARD_Y, "NEXT", 1, LABEL);
        let next = game.next();
        for (dx, dy) in get_shape(next, Rotation::North) {
            fb.fill_rect(
                PANEL_X + dx * CELL,
                BOARD_Y + 8 + dy * CELL,
                CELL,
                CELL,
                piece_color(next),
            );
        }

        draw_text(fb, PANEL_X, BOARD_Y + 30, "SCORE", 1, LABEL);
        draw_text(fb, PANEL_X, BOARD_Y + 38, text!("{}", game.score()).as_str(), 1, VALUE);
        draw_text(fb, PANEL_X, BOARD_Y + 50, "LINES", 1, LABEL);
        draw_text(fb, PANEL_X, BOARD_Y + 58, text!("{}", game.lines()).as_str(), 1, VALUE);

        if game.status() == Status::Lost {
            banner(fb, &[("GAME OVER", 1, OVER), ("R RESTART", 1, FRAME)]);
        }
    }
}
