//! Game loop plumbing shared by every title.
//!
//! - [`clock`]: monotonic microsecond clocks (wall and manual)
//! - [`pacer`]: fixed-rate frame pacing with spin or sleep waits
//! - [`title`]: the [`Title`] seam and the title factory
//! - [`titles`]: key mapping and tick pacing per game
//! - [`runner`]: drain input, advance, render, flush
//! - [`config`]: environment overrides
//! - [`log`]: JSON-lines lifecycle log
//! - [`app`]: terminal launch used by the binaries

pub mod app;
pub mod clock;
pub mod config;
pub mod log;
pub mod pacer;
pub mod runner;
pub mod title;
pub mod titles;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use app::{launch, main_for};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ArcadeConfig;
pub use log::{EventKind, EventLog, EventValue, LogRecord};
pub use pacer::{FramePacer, Pacing};
pub use runner::{run, RunOptions, RunSummary};
pub use title::{make_title, KeyEffect, Title};
pub use titles::{BlocksTitle, FlappyTitle, MergeTitle, MinesTitle, PushboxTitle};
