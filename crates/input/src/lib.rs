//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::KeyInput`] transitions and
//! defines the [`InputSource`] seam the runner polls, with a live terminal
//! source and a scripted one for headless runs and tests.

pub mod map;
pub mod source;

pub use tui_arcade_types as types;

pub use map::{map_key_code, map_key_event, should_quit};
pub use source::{CrosstermInput, InputSource, ScriptedInput};
