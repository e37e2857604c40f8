//! Side-scroller: sky, pipes with caps, coins, textured ground and the bird.

use crate::core::FlappyGame;
use crate::draw::{draw_text, draw_text_centered, fill_circle, ring};
use crate::fb::PixelBuffer;
use crate::text;
use crate::types::{Pixel, Status};

use super::{banner, View};

const SKY: Pixel = 0x0087_ceeb;
const BIRD: Pixel = 0x00ff_d700;
const BEAK: Pixel = 0x00ff_a500;
const EYE: Pixel = 0x00ff_ffff;
const PUPIL: Pixel = 0x0000_0000;
const PIPE: Pixel = 0x0022_8b22;
const PIPE_CAP: Pixel = 0x0019_6f19;
const GROUND: Pixel = 0x00cd_853f;
const GROUND_STRIPE: Pixel = 0x00a0_6a30;
const COIN: Pixel = 0x00ff_d700;
const COIN_EDGE: Pixel = 0x00ff_a500;
const SCORE: Pixel = 0x00ff_d700;
const WHITE: Pixel = 0x00ff_ffff;
const RED: Pixel = 0x00ff_0000;

pub const WIDTH: u16 = 320;
pub const HEIGHT: u16 = 240;

const CAP_H: i32 = 8;
const CAP_OVERHANG: i32 = 3;
const STRIPE_SPACING: i32 = 16;

#[derive(Debug, Clone, Copy)]
pub struct FlappyView {
    width: u16,
    height: u16,
}

impl Default for FlappyView {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl FlappyView {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl View for FlappyView {
    type State = FlappyGame;

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn render_into(&self, game: &FlappyGame, fb: &mut PixelBuffer) {
        self.prepare(fb);
        fb.clear(SKY);

        let geo = game.geometry();
        let ground_y = geo.ground_y();
        let half_gap = geo.pipe_gap / 2;

        for p in game.pipes().iter().filter(|p| p.active) {
            let top_end = p.gap_y - half_gap;
            let bottom_start = p.gap_y + half_gap;
            fb.fill_rect(p.x, 0, geo.pipe_width, top_end, PIPE);
            fb.fill_rect(p.x, bottom_start, geo.pipe_width, ground_y - bottom_start, PIPE);
            let cap_x = p.x - CAP_OVERHANG;
            let cap_w = geo.pipe_width + CAP_OVERHANG * 2;
            fb.fill_rect(cap_x, top_end - CAP_H, cap_w, CAP_H, PIPE_CAP);
            fb.fill_rect(cap_x, bottom_start, cap_w, CAP_H, PIPE_CAP);
        }

        for c in game.coins().iter().filter(|c| c.is_live()) {
            ring(fb, c.x, c.y, c.size / 2 + 1, 1, COIN_EDGE, COIN);
        }

        fb.fill_rect(0, ground_y, geo.width, geo.ground_height, GROUND);
        let mut sx = game.ground_offset() % STRIPE_SPACING;
        while sx < geo.width {
            fb.fill_rect(sx, ground_y + 2, STRIPE_SPACING / 2, 2, GROUND_STRIPE);
            sx += STRIPE_SPACING;
        }

        let bx = geo.bird_x();
        let by = game.bird_y();
        let r = geo.bird_radius();
        fill_circle(fb, bx, by, r, BIRD);
        fb.fill_rect(bx + r - 1, by - 1, r / 2 + 1, 3, BEAK);
        fill_circle(fb, bx + r / 3, by - r / 3, (r / 4).max(1), EYE);
        fb.set(bx + r / 3 + 1, by - r / 3, PUPIL);

        let w = geo.width;
        draw_text_centered(fb, w / 2, 8, text!("{}", game.total_score()).as_str(), 4, SCORE);
        ring(fb, 12, 12, 5, 1, COIN_EDGE, COIN);
        draw_text(fb, 22, 8, text!("{}", game.coin_score()).as_str(), 2, WHITE);

        if game.status() == Status::Lost {
            let score = text!("SCORE {}", game.total_score());
            banner(
                fb,
                &[
                    ("GAME OVER", 4, RED),
                    (score.as_str(), 3, SCORE),
                    ("R RESTART", 2, WHITE),
                ],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_body_and_gap_are_painted() {
        let mut game = FlappyGame::new(WIDTH as i32, HEIGHT as i32, 5);
        game.place_pipe(200, 120);
        let mut fb = PixelBuffer::new(WIDTH, HEIGHT);
        FlappyView::default().render_into(&game, &mut fb);

        let x = 200 + game.geometry().pipe_width / 2;
        assert_eq!(fb.get(x, 120), Some(SKY));
        assert_eq!(fb.get(x, 20), Some(PIPE));
        assert_eq!(fb.get(5, HEIGHT as i32 - 1), Some(GROUND));
    }

    #[test]
    fn bird_is_drawn_at_its_center() {
        let game = FlappyGame::new(WIDTH as i32, HEIGHT as i32, 5);
        let mut fb = PixelBuffer::new(WIDTH, HEIGHT);
        FlappyView::default().render_into(&game, &mut fb);
        let geo = game.geometry();
        assert_eq!(fb.get(geo.bird_x() - 1, game.bird_y() + 1), Some(BIRD));
    }
}
