//! Software rasterizer primitives on a [`PixelBuffer`].
//!
//! All shapes clip against the buffer; nothing here can write out of bounds.

use std::fmt;

use crate::fb::PixelBuffer;
use crate::font::{glyph, glyph_bit, icon_bit, Glyph, ADVANCE, GLYPH_H, GLYPH_W, ICON_SIZE};
use crate::types::{channels, rgb, Pixel};

/// Solid disc centred on `(cx, cy)`.
pub fn fill_circle(fb: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: Pixel) {
    if r < 0 {
        return;
    }
    let r2 = r * r;
    for dy in -r..=r {
        // widest dx on this row
        let mut half = 0;
        while (half + 1) * (half + 1) + dy * dy <= r2 {
            half += 1;
        }
        fb.fill_rect(cx - half, cy + dy, half * 2 + 1, 1, color);
    }
}

/// Disc of radius `r` with its outer band of `thickness` pixels in `edge`.
pub fn ring(fb: &mut PixelBuffer, cx: i32, cy: i32, r: i32, thickness: i32, edge: Pixel, fill: Pixel) {
    fill_circle(fb, cx, cy, r, edge);
    fill_circle(fb, cx, cy, r - thickness, fill);
}

/// Rectangle outline `t` pixels thick, drawn inside `(x, y, w, h)`.
pub fn border(fb: &mut PixelBuffer, x: i32, y: i32, w: i32, h: i32, t: i32, color: Pixel) {
    fb.fill_rect(x, y, w, t, color);
    fb.fill_rect(x, y + h - t, w, t, color);
    fb.fill_rect(x, y, t, h, color);
    fb.fill_rect(x + w - t, y, t, h, color);
}

/// Scale each channel by `num / den`.
pub fn darken_pixel(p: Pixel, num: u32, den: u32) -> Pixel {
    if den == 0 {
        return p;
    }
    let (r, g, b) = channels(p);
    let scale = |c: u8| ((c as u32 * num) / den).min(255) as u8;
    rgb(scale(r), scale(g), scale(b))
}

/// Darken the whole buffer, used behind end-of-game banners.
pub fn darken(fb: &mut PixelBuffer, num: u32, den: u32) {
    fb.map_pixels(|p| darken_pixel(p, num, den));
}

/// Width in pixels of `text` at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    (n * ADVANCE - 1) * scale
}

pub fn text_height(scale: i32) -> i32 {
    GLYPH_H * scale
}

/// Draw one glyph with its top-left at `(x, y)`. Only set bits are painted.
pub fn draw_glyph(fb: &mut PixelBuffer, x: i32, y: i32, g: &Glyph, scale: i32, color: Pixel) {
    for row in 0..GLYPH_H {
        for col in 0..GLYPH_W {
            if glyph_bit(g, col, row) {
                fb.fill_rect(x + col * scale, y + row * scale, scale, scale, color);
            }
        }
    }
}

/// Draw `text`; returns the x just past the last glyph.
pub fn draw_text(fb: &mut PixelBuffer, x: i32, y: i32, text: &str, scale: i32, color: Pixel) -> i32 {
    let mut pen = x;
    for ch in text.chars() {
        draw_glyph(fb, pen, y, glyph(ch), scale, color);
        pen += ADVANCE * scale;
    }
    pen - scale
}

/// Draw `text` horizontally centred on `cx`.
pub fn draw_text_centered(fb: &mut PixelBuffer, cx: i32, y: i32, text: &str, scale: i32, color: Pixel) {
    let w = text_width(text, scale);
    draw_text(fb, cx - w / 2, y, text, scale, color);
}

/// Draw a 5x5 icon with each bit as a `scale`-sized block.
pub fn draw_icon(fb: &mut PixelBuffer, x: i32, y: i32, icon: &Glyph, scale: i32, color: Pixel) {
    for row in 0..ICON_SIZE {
        for col in 0..ICON_SIZE {
            if icon_bit(icon, col, row) {
                fb.fill_rect(x + col * scale, y + row * scale, scale, scale, color);
            }
        }
    }
}

/// Fixed-capacity text for labels and counters, so frames never allocate.
#[derive(Debug, Clone, Copy)]
pub struct TextBuf {
    bytes: [u8; 32],
    len: usize,
}

impl TextBuf {
    pub fn new() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

impl Default for TextBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for TextBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Format into a [`TextBuf`]; output past its capacity is dropped.
#[macro_export]
macro_rules! text {
    ($($arg:tt)*) => {{
        let mut buf = $crate::draw::TextBuf::new();
        let _ = ::std::fmt::Write::write_fmt(&mut buf, format_args!($($arg)*));
        buf
    }};
}
