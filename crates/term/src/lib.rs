//! Terminal "game renderer" module.
//!
//! Every title paints a full frame into a [`PixelBuffer`] through its
//! [`View`], then hands it to a [`DisplaySink`]. The terminal sink packs two
//! pixels per character cell and writes only what changed; the memory sink
//! keeps frames for headless runs and tests.
//!
//! - [`fb`]: pixel buffer and terminal cell buffer
//! - [`draw`]: rects, circles, rings, borders, dimming, bitmap text
//! - [`font`]: static 3x5 glyph table and 5x5 icons
//! - [`sink`]: the display seam and the in-memory sink
//! - [`renderer`]: crossterm-backed sink
//! - [`views`]: one view per title

pub mod draw;
pub mod fb;
pub mod font;
pub mod renderer;
pub mod sink;
pub mod views;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use draw::TextBuf;
pub use fb::{Cell, CellStyle, FrameBuffer, PixelBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, fit_into, TerminalSink};
pub use sink::{DisplaySink, MemorySink};
pub use views::{BlocksView, FlappyView, MergeView, MinesView, PushboxView, View};
