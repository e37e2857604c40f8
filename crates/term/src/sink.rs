//! Display sink seam.
//!
//! A sink accepts rectangles of pixels and a flush request; what "display"
//! means is up to the implementation. [`MemorySink`] keeps the composed frame
//! in memory for headless runs and tests.

use anyhow::Result;

use crate::fb::PixelBuffer;
use crate::types::Pixel;

pub trait DisplaySink {
    /// Copy a `w x h` rectangle to `(x, y)`; `None` copies nothing.
    /// With `flush` set the composed frame is presented.
    fn blit(
        &mut self,
        x: i32,
        y: i32,
        pixels: Option<&[Pixel]>,
        w: u16,
        h: u16,
        flush: bool,
    ) -> Result<()>;

    /// Blit a whole buffer at the origin and present it.
    fn present(&mut self, fb: &PixelBuffer) -> Result<()> {
        self.blit(0, 0, Some(fb.pixels()), fb.width(), fb.height(), true)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn blit(
        &mut self,
        x: i32,
        y: i32,
        pixels: Option<&[Pixel]>,
        w: u16,
        h: u16,
        flush: bool,
    ) -> Result<()> {
        (**self).blit(x, y, pixels, w, h, flush)
    }
}

/// In-memory sink: composes blits and counts presented frames.
#[derive(Debug, Clone)]
pub struct MemorySink {
    canvas: PixelBuffer,
    frames: u64,
}

impl MemorySink {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            canvas: PixelBuffer::new(width, height),
            frames: 0,
        }
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    /// Number of flushes seen
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DisplaySink for MemorySink {
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
            self.frames += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_composes_and_counts_flushes() {
        let mut sink = MemorySink::new(4, 4);
        sink.blit(1, 1, Some(&[5, 6]), 2, 1, false).unwrap();
        assert_eq!(sink.frames(), 0);
        sink.blit(0, 0, None, 0, 0, true).unwrap();
        assert_eq!(sink.frames(), 1);
        assert_eq!(sink.canvas().get(1, 1), Some(5));
        assert_eq!(sink.canvas().get(2, 1), Some(6));
    }

    #[test]
    fn present_copies_the_whole_buffer() {
        let mut fb = PixelBuffer::new(2, 2);
        fb.clear(3);
        let mut sink = MemorySink::new(2, 2);
        sink.present(&fb).unwrap();
        assert!(sink.canvas().pixels().iter().all(|&p| p == 3));
        assert_eq!(sink.frames(), 1);
    }
}
