//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of every title. It has **zero
//! dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same seed and inputs replay the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs headless as easily as in a terminal
//! - **Allocation-free**: boards, slot arrays and queues are fixed-size
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size, bounds-checked 2D storage shared by the board games
//! - [`rng`]: seeded LCG used for every random decision
//! - [`queue`]: bounded command ring buffer
//! - [`merge`]: sliding-tile merge puzzle (4x4)
//! - [`blocks`]: falling-block puzzle (10x20)
//! - [`flappy`]: side-scrolling obstacle avoidance
//! - [`pushbox`]: grid push-puzzle (10x10)
//! - [`mines`]: mine-sweeper (16x16, 40 mines)
//!
//! # Lifecycle
//!
//! Every game starts in [`Status::Playing`](types::Status::Playing) and moves
//! one way into `Won`, `Lost` or `Exited`. Operations on a finished game are
//! no-ops; `restart()` re-initializes everything.
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::MergeGame;
//! use tui_arcade_types::{Direction, Status};
//!
//! let mut game = MergeGame::with_tiles(
//!     [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
//!     12345,
//! );
//! let outcome = game.apply_direction(Direction::Left);
//! assert_eq!(outcome.gained, 4);
//! assert_eq!(game.tile(0, 0), Some(4));
//! assert_eq!(game.status(), Status::Playing);
//! ```

pub mod blocks;
pub mod flappy;
pub mod grid;
pub mod merge;
pub mod mines;
pub mod pushbox;
pub mod queue;
pub mod rng;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use blocks::{BlocksGame, Board, LockOutcome, Piece};
pub use flappy::{bird_collides, Coin, FlappyGame, FlappyGeometry, Pipe, TickEvents};
pub use grid::Grid;
pub use merge::{slide_line, MergeGame, MoveOutcome};
pub use mines::{MineCell, MinesGame, RevealOutcome};
pub use pushbox::{Base, LevelError, MoveResult, Overlay, PushboxGame, DEFAULT_LEVEL};
pub use queue::CommandQueue;
pub use rng::SimpleRng;
