//! TerminalSink: presents composed pixel frames on a real terminal.
//!
//! Pixels are packed two per cell with the upper half block: the foreground
//! paints the top pixel and the background the bottom one. Frames larger
//! than the terminal are downsampled (nearest neighbour, aspect kept);
//! smaller frames are centred. Only cells that changed since the previous
//! flush are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, PixelBuffer, Rgb};
use crate::sink::DisplaySink;
use crate::types::Pixel;

pub struct TerminalSink {
    stdout: io::Stdout,
    canvas: PixelBuffer,
    screen: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalSink {
    /// Sink for frames of `width x height` logical pixels.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            stdout: io::stdout(),
            canvas: PixelBuffer::new(width, height),
            screen: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next flush to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    fn present_canvas(&mut self) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        fit_into(&self.canvas, cols, rows, &mut self.screen);
        self.draw_swap()
    }

    /// Write the screen buffer, diffing against the previous frame, then
    /// swap so the old frame's allocation is reused for the next one.
    fn draw_swap(&mut self) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => FrameBuffer::new(0, 0),
        };
        let needs_full =
            prev.width() != self.screen.width() || prev.height() != self.screen.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(&self.screen, &mut self.buf)?;
            prev.resize(self.screen.width(), self.screen.height());
        } else {
            encode_diff_into(&prev, &self.screen, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut prev, &mut self.screen);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl DisplaySink for TerminalSink {
    fn blit(
        &mut self,
        x: i32,
        y: i32,
        pixels: Option<&[Pixel]>,
        w: u16,
        h: u16,
        flush: bool,
    ) -> Result<()> {
        if let Some(src) = pixels {
            self.canvas.blit(x, y, src, w, h);
        }
        if flush {
            self.present_canvas()?;
        }
        Ok(())
    }
}

/// Scale `src` into a `cols x rows` cell grid of half blocks.
///
/// The frame keeps its aspect ratio, is never upscaled, and sits centred on
/// a black background. Vertical centring is rounded to whole cells so each
/// cell still holds one source row pair.
pub fn fit_into(src: &PixelBuffer, cols: u16, rows: u16, out: &mut FrameBuffer) {
    out.resize(cols, rows);
    out.clear(Cell::half_block(0, 0));

    let (sw, sh) = (src.width() as u32, src.height() as u32);
    let (max_w, max_h) = (cols as u32, rows as u32 * 2);
    if sw == 0 || sh == 0 || max_w == 0 || max_h == 0 {
        return;
    }

    let (tw, th) = if sw <= max_w && sh <= max_h {
        (sw, sh)
    } else if sw * max_h >= sh * max_w {
        (max_w, (sh * max_w / sw).max(1))
    } else {
        ((sw * max_h / sh).max(1), max_h)
    };
    let ox = (max_w - tw) / 2;
    let oy = (max_h - th) / 4;

    let sample = |tx: u32, ty: u32| -> Pixel {
        if ty >= th {
            return 0;
        }
        src.get((tx * sw / tw) as i32, (ty * sh / th) as i32)
            .unwrap_or(0)
    };

    for cy in 0..th.div_ceil(2) {
        for tx in 0..tw {
            let cell = Cell::half_block(sample(tx, cy * 2), sample(tx, cy * 2 + 1));
            out.set((ox + tx) as u16, (oy + cy) as u16, cell);
        }
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
