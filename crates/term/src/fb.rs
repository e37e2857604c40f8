//! Framebuffer types: logical pixels and terminal cells.
//!
//! Titles draw into a [`PixelBuffer`] of packed `0x00RRGGBB` pixels. The
//! terminal sink turns pixel pairs into half-block [`Cell`]s in a
//! [`FrameBuffer`], which is what gets diffed and written out.

use crate::types::{channels, Pixel};

/// Off-screen buffer of packed pixels.
///
/// Every write is clipped to the buffer; negative or oversized coordinates
/// are simply dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Resize, keeping the allocation when possible. Contents are cleared.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.clear();
        self.pixels.resize(len, 0);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, p: Pixel) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = p;
        }
    }

    pub fn clear(&mut self, p: Pixel) {
        self.pixels.fill(p);
    }

    /// Fill a rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, p: Pixel) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x.saturating_add(w)).min(self.width as i32);
        let y1 = (y.saturating_add(h)).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = self.width as usize;
        for row in y0..y1 {
            let start = row as usize * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(p);
        }
    }

    /// Copy a `w x h` block of pixels to `(x, y)`, clipped
    ///
    /// A `src` shorter than `w * h` copies only the rows it covers.
    pub fn blit(&mut self, x: i32, y: i32, src: &[Pixel], w: u16, h: u16) {
        let w = w as usize;
        if w == 0 {
            return;
        }
        for (row, line) in src.chunks(w).take(h as usize).enumerate() {
            for (col, &p) in line.iter().enumerate() {
                self.set(x + col as i32, y + row as i32, p);
            }
        }
    }

    /// Apply `f` to every pixel
    pub fn map_pixels(&mut self, mut f: impl FnMut(Pixel) -> Pixel) {
        for p in &mut self.pixels {
            *p = f(*p);
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_pixel(p: Pixel) -> Self {
        let (r, g, b) = channels(p);
        Self { r, g, b }
    }
}

/// Per-cell colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

/// Upper half block: foreground paints the top pixel, background the bottom.
pub const HALF_BLOCK: char = '▀';

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// Two vertically stacked pixels in one cell
    pub const fn half_block(top: Pixel, bottom: Pixel) -> Self {
        Self {
            ch: HALF_BLOCK,
            style: CellStyle {
                fg: Rgb::from_pixel(top),
                bg: Rgb::from_pixel(bottom),
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}
