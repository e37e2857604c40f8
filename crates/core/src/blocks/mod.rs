//! Falling-block puzzle rules
//!
//! - [`board`]: 10x20 playfield with collision checks and line clearing
//! - [`pieces`]: static 4x4 piece bitmaps
//! - [`scoring`]: line clear table and gravity speed
//! - [`game_state`]: active piece, preview, score, gravity timer, lifecycle

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod scoring;

pub use board::Board;
pub use game_state::{BlocksGame, LockOutcome, Piece, SPAWN_X};
pub use pieces::{get_shape, PieceShape};
pub use scoring::{fall_interval_us, line_score};
