//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every title.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engines, rasterizers, input mapping).
//!
//! # Titles
//!
//! | Title | Grid | Frame rate | Notes |
//! |-------|------|------------|-------|
//! | `merge` | 4x4 | 30 FPS | 5 logic steps per second, 8-slot command queue |
//! | `blocks` | 10x20 | 60 FPS | gravity interval shrinks as score grows |
//! | `flappy` | free | 90 FPS | integer-scaled physics (x100) |
//! | `pushbox` | 10x10 | 10 FPS | base layer + overlay layer |
//! | `mines` | 16x16 | 30 FPS | 40 mines |
//!
//! # Pixel Format
//!
//! Colors are packed `0x00RRGGBB`; the top byte is ignored.
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, Key, Status, TitleKind};
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(Direction::from_key(Key::W), Some(Direction::Up));
//! assert!(Status::Won.is_terminal());
//! assert_eq!(TitleKind::from_str("mines"), Some(TitleKind::Mines));
//! ```

// --- merge (sliding tiles) -------------------------------------------------

/// Side length of the sliding-tile grid.
pub const MERGE_SIZE: usize = 4;

/// Capacity of the sliding-tile command queue.
pub const MERGE_QUEUE_CAPACITY: usize = 8;

/// Frame rate of the sliding-tile title.
pub const MERGE_FPS: u32 = 30;

/// Logic steps per second (one queued direction consumed per step).
pub const MERGE_CPS: u32 = 5;

/// Tile value that wins the game.
pub const MERGE_GOAL: u32 = 2048;

// --- blocks (falling pieces) -----------------------------------------------

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame rate of the falling-block title.
pub const BLOCKS_FPS: u32 = 60;

/// Fall interval at score 0 (1 second per row).
pub const BASE_FALL_US: u64 = 1_000_000;

/// Fall interval reduction per 1000 points.
pub const FALL_STEP_US: u64 = 100_000;

/// Fastest fall interval.
pub const MIN_FALL_US: u64 = 100_000;

/// Line clear scoring table, indexed by lines cleared (4 and above share the last entry).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

// --- flappy (side scroller) ------------------------------------------------

/// Fixed-point scale for the bird's position and velocity.
pub const FLAPPY_SCALE: i32 = 100;

/// Frame rate of the side scroller.
pub const FLAPPY_FPS: u32 = 90;

/// Gravity added to velocity every tick (scaled).
pub const FLAPPY_GRAVITY: i32 = 50;

/// Velocity set by a jump (scaled, negative is up).
pub const FLAPPY_JUMP: i32 = -800;

/// Pipe slots.
pub const MAX_PIPES: usize = 5;

/// Coin slots.
pub const MAX_COINS: usize = 10;

/// Minimum ticks between pipe spawns.
pub const MIN_SPAWN_TICKS: u32 = 60;

// --- pushbox ---------------------------------------------------------------

/// Push-puzzle grid side length.
pub const PUSHBOX_SIZE: usize = 10;

/// Frame rate of the push-puzzle.
pub const PUSHBOX_FPS: u32 = 10;

// --- mines -----------------------------------------------------------------

/// Minefield side length.
pub const MINES_SIZE: usize = 16;

/// Number of mines placed at start.
pub const MINE_COUNT: usize = 40;

/// Frame rate of the mine-sweeper.
pub const MINES_FPS: u32 = 30;

/// Game lifecycle status shared by every title.
///
/// Transitions only go from `Playing` to one of the terminal states; a title
/// leaves a terminal state only through a full restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
    Exited,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Lost => "lost",
            Status::Exited => "exited",
        }
    }
}

/// Orthogonal direction in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as `(dx, dy)`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Arrow keys and WASD.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up | Key::W => Some(Direction::Up),
            Key::Down | Key::S => Some(Direction::Down),
            Key::Left | Key::A => Some(Direction::Left),
            Key::Right | Key::D => Some(Direction::Right),
            _ => None,
        }
    }

    /// Arrow keys only.
    pub fn from_arrow(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Keys the titles understand. Anything else arrives as `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Escape,
    F,
    Q,
    R,
    Other,
}

/// A discrete key transition from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub is_down: bool,
}

impl KeyInput {
    pub fn down(key: Key) -> Self {
        Self { key, is_down: true }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            is_down: false,
        }
    }
}

/// The five titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleKind {
    Merge,
    Blocks,
    Flappy,
    Pushbox,
    Mines,
}

impl TitleKind {
    pub const ALL: [TitleKind; 5] = [
        TitleKind::Merge,
        TitleKind::Blocks,
        TitleKind::Flappy,
        TitleKind::Pushbox,
        TitleKind::Mines,
    ];

    /// Parse title id (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::TitleKind;
    ///
    /// assert_eq!(TitleKind::from_str("Blocks"), Some(TitleKind::Blocks));
    /// assert_eq!(TitleKind::from_str("2048"), Some(TitleKind::Merge));
    /// assert_eq!(TitleKind::from_str("pong"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "merge" | "2048" => Some(TitleKind::Merge),
            "blocks" | "tetris" => Some(TitleKind::Blocks),
            "flappy" | "bird" => Some(TitleKind::Flappy),
            "pushbox" | "sokoban" => Some(TitleKind::Pushbox),
            "mines" | "minesweeper" => Some(TitleKind::Mines),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleKind::Merge => "merge",
            TitleKind::Blocks => "blocks",
            TitleKind::Flappy => "flappy",
            TitleKind::Pushbox => "pushbox",
            TitleKind::Mines => "mines",
        }
    }
}

/// The seven falling-block piece kinds, in bitmap table order.
///
/// Each piece has a distinct color:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Purple
/// - **L**: Orange
/// - **J**: Blue
/// - **S**: Green
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

/// Rotation index 0..=3, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate by `steps` quarter turns (negative is counter-clockwise).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.turned(1), Rotation::East);
    /// assert_eq!(Rotation::West.turned(1), Rotation::North);
    /// assert_eq!(Rotation::North.turned(-1), Rotation::West);
    /// ```
    pub fn turned(&self, steps: i8) -> Self {
        let i = (self.index() as i8 + steps).rem_euclid(4);
        match i {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// A cell on the falling-block board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece (the kind selects the color)
pub type Cell = Option<PieceKind>;

/// Packed `0x00RRGGBB` pixel.
pub type Pixel = u32;

/// Pack 8-bit channels into a pixel.
pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split a pixel into channels, ignoring the top byte.
pub const fn channels(p: Pixel) -> (u8, u8, u8) {
    (((p >> 16) & 0xff) as u8, ((p >> 8) & 0xff) as u8, (p & 0xff) as u8)
}

/// Frame budget in microseconds for a frame rate.
pub const fn frame_budget_us(fps: u32) -> u64 {
    1_000_000 / fps as u64
}
