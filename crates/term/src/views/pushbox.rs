//! Push-puzzle: base tiles with the box and player overlay on top.

use crate::core::{Base, Overlay, PushboxGame};
use crate::draw::{border, draw_text, fill_circle, text_width};
use crate::fb::PixelBuffer;
use crate::text;
use crate::types::{Pixel, Status, PUSHBOX_SIZE};

use super::{banner, View};

const WALL: Pixel = 0x008b_4513;
const FLOOR: Pixel = 0x00f5_f5dc;
const TARGET: Pixel = 0x0000_ced1;
const BOX: Pixel = 0x00cd_853f;
const BOX_ON_TARGET: Pixel = 0x00ff_4500;
const PLAYER: Pixel = 0x00ff_6347;
const EDGE: Pixel = 0x0000_0000;
const WHITE: Pixel = 0x00ff_ffff;
const GREEN: Pixel = 0x0000_ff00;

const TILE: i32 = 8;
const HEADER: i32 = 10;
const N: i32 = PUSHBOX_SIZE as i32;

pub const WIDTH: u16 = (N * TILE) as u16;
pub const HEIGHT: u16 = (HEADER + N * TILE) as u16;

#[derive(Debug, Clone, Copy, Default)]
pub struct PushboxView;

impl PushboxView {
    pub fn tile_origin(x: i32, y: i32) -> (i32, i32) {
        (x * TILE, HEADER + y * TILE)
    }
}

impl View for PushboxView {
    type State = PushboxGame;

    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn render_into(&self, game: &PushboxGame, fb: &mut PixelBuffer) {
        self.prepare(fb);
        fb.clear(EDGE);

        draw_text(fb, 1, 2, text!("MOVES {}", game.moves()).as_str(), 1, WHITE);
        let boxes = text!("{}/{}", game.boxes_on_target(), game.total_targets());
        let w = text_width(boxes.as_str(), 1);
        draw_text(fb, WIDTH as i32 - 1 - w, 2, boxes.as_str(), 1, WHITE);

        for y in 0..N {
            for x in 0..N {
                let (px, py) = Self::tile_origin(x, y);
                let base = game.base(x, y).unwrap_or(Base::Wall);
                let color = match base {
                    Base::Wall => WALL,
                    Base::Floor => FLOOR,
                    Base::Target => TARGET,
                };
                fb.fill_rect(px, py, TILE, TILE, color);
                border(fb, px, py, TILE, TILE, 1, EDGE);

                match game.overlay(x, y) {
                    Some(Overlay::Box) => {
                        let inset = TILE / 8;
                        let c = if base == Base::Target { BOX_ON_TARGET } else { BOX };
                        fb.fill_rect(px + inset, py + inset, TILE - inset * 2, TILE - inset * 2, c);
                    }
                    Some(Overlay::Player) => {
                        fill_circle(fb, px + TILE / 2, py + TILE / 2, TILE / 4, PLAYER);
                    }
                    Some(Overlay::Empty) | None => {}
                }
            }
        }

        if game.status() == Status::Won {
            banner(fb, &[("YOU WIN", 2, GREEN), ("R RESTART", 1, WHITE)]);
        }
    }
}
