//! Merge module - the sliding-tile puzzle
//!
//! A 4x4 grid of power-of-two tiles (0 is empty). A move slides every line
//! toward one edge in a single compaction-and-merge pass; equal neighbours
//! merge once per move into a tile of double value, adding that value to the
//! score. A move that changed anything spawns one new tile (2, or 4 with
//! probability 1/10) on a random empty cell.
//!
//! Directions arrive through a bounded [`CommandQueue`] and are consumed one
//! per logic step, so a burst of key presses is played back at a fixed rate.

use crate::grid::Grid;
use crate::queue::CommandQueue;
use crate::rng::SimpleRng;
use crate::types::{Direction, Status, MERGE_GOAL, MERGE_QUEUE_CAPACITY, MERGE_SIZE};

/// One line of the grid, ordered from the edge tiles slide toward.
pub type Line = [u32; MERGE_SIZE];

/// Slide and merge one line toward index 0
///
/// Returns the points gained (sum of the merged tile values).
///
/// # Examples
///
/// ```
/// use tui_arcade_core::merge::slide_line;
///
/// let mut line = [2, 2, 2, 0];
/// assert_eq!(slide_line(&mut line), 4);
/// assert_eq!(line, [4, 2, 0, 0]);
///
/// let mut line = [2, 2, 4, 0];
/// assert_eq!(slide_line(&mut line), 4);
/// assert_eq!(line, [4, 4, 0, 0]);
/// ```
pub fn slide_line(line: &mut Line) -> u32 {
    let mut merged = [false; MERGE_SIZE];
    let mut gained = 0;

    for i in 1..MERGE_SIZE {
        if line[i] == 0 {
            continue;
        }
        let mut at = i;
        while at > 0 && line[at - 1] == 0 {
            line[at - 1] = line[at];
            line[at] = 0;
            at -= 1;
        }
        if at > 0 && !merged[at - 1] && line[at - 1] == line[at] {
            line[at - 1] *= 2;
            line[at] = 0;
            merged[at - 1] = true;
            gained += line[at - 1];
        }
    }
    gained
}

/// Grid coordinates of line `i` for a direction, ordered from the target edge
fn line_coords(dir: Direction, i: usize) -> [(i32, i32); MERGE_SIZE] {
    let n = MERGE_SIZE as i32;
    let i = i as i32;
    let mut out = [(0, 0); MERGE_SIZE];
    for (k, slot) in out.iter_mut().enumerate() {
        let k = k as i32;
        *slot = match dir {
            Direction::Left => (k, i),
            Direction::Right => (n - 1 - k, i),
            Direction::Up => (i, k),
            Direction::Down => (i, n - 1 - k),
        };
    }
    out
}

/// Result of applying one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one cell changed.
    pub changed: bool,
    pub gained: u32,
    /// `(x, y, value)` of the tile spawned after the move.
    pub spawned: Option<(i32, i32, u32)>,
}

/// Complete sliding-tile game state
#[derive(Debug, Clone)]
pub struct MergeGame {
    grid: Grid<u32, MERGE_SIZE, MERGE_SIZE>,
    score: u32,
    status: Status,
    rng: SimpleRng,
    queue: CommandQueue<Direction, MERGE_QUEUE_CAPACITY>,
}

impl MergeGame {
    /// New game with two 2-tiles on random cells
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            grid: Grid::new(0),
            score: 0,
            status: Status::Playing,
            rng: SimpleRng::new(seed),
            queue: CommandQueue::new(),
        };
        for _ in 0..2 {
            game.spawn_value(2);
        }
        game
    }

    /// Game with a fixed layout, given as rows (top to bottom)
    pub fn with_tiles(rows: [[u32; MERGE_SIZE]; MERGE_SIZE], seed: u32) -> Self {
        let mut game = Self {
            grid: Grid::new(0),
            score: 0,
            status: Status::Playing,
            rng: SimpleRng::new(seed),
            queue: CommandQueue::new(),
        };
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                game.grid.set(x as i32, y as i32, v);
            }
        }
        game.update_status();
        game
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<u32> {
        self.grid.get(x, y)
    }

    pub fn rows(&self) -> &[[u32; MERGE_SIZE]; MERGE_SIZE] {
        self.grid.rows()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn empty_cells(&self) -> usize {
        self.grid.count(|v| v == 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.iter().map(|(_, _, v)| v).max().unwrap_or(0)
    }

    /// Queue a direction for a later logic step. Refused when the queue is full.
    pub fn enqueue(&mut self, dir: Direction) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        self.queue.push(dir)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// One logic step: consume at most one queued direction
    pub fn step(&mut self) -> Option<MoveOutcome> {
        if self.status != Status::Playing {
            return None;
        }
        let dir = self.queue.pop()?;
        Some(self.apply_direction(dir))
    }

    /// Slide every line toward `dir`, then spawn if anything changed
    pub fn apply_direction(&mut self, dir: Direction) -> MoveOutcome {
        if self.status != Status::Playing {
            return MoveOutcome::default();
        }

        let mut outcome = MoveOutcome::default();
        for i in 0..MERGE_SIZE {
            let coords = line_coords(dir, i);
            let mut line = [0; MERGE_SIZE];
            for (slot, &(x, y)) in line.iter_mut().zip(coords.iter()) {
                *slot = self.grid.get(x, y).unwrap_or(0);
            }
            let before = line;
            outcome.gained += slide_line(&mut line);
            if line != before {
                outcome.changed = true;
                for (&v, &(x, y)) in line.iter().zip(coords.iter()) {
                    self.grid.set(x, y, v);
                }
            }
        }

        if outcome.changed {
            self.score += outcome.gained;
            let value = if self.rng.chance(1, 10) { 4 } else { 2 };
            outcome.spawned = self.spawn_value(value);
        }
        self.update_status();
        outcome
    }

    /// Place `value` on a uniformly random empty cell
    fn spawn_value(&mut self, value: u32) -> Option<(i32, i32, u32)> {
        let empty = self.empty_cells();
        if empty == 0 {
            return None;
        }
        let pick = self.rng.next_range(empty as u32) as usize;
        let (x, y, _) = self.grid.iter().filter(|&(_, _, v)| v == 0).nth(pick)?;
        self.grid.set(x, y, value);
        Some((x, y, value))
    }

    /// Whether any direction would change the grid
    pub fn has_moves(&self) -> bool {
        if self.empty_cells() > 0 {
            return true;
        }
        self.grid.iter().any(|(x, y, v)| {
            self.grid.get(x + 1, y) == Some(v) || self.grid.get(x, y + 1) == Some(v)
        })
    }

    fn update_status(&mut self) {
        if self.status != Status::Playing {
            return;
        }
        if self.max_tile() >= MERGE_GOAL {
            self.status = Status::Won;
        } else if !self.has_moves() {
            self.status = Status::Lost;
        }
    }

    pub fn exit(&mut self) {
        self.status = Status::Exited;
    }

    /// Fully re-initialize, continuing the RNG sequence
    pub fn restart(&mut self) {
        *self = Self::new(self.rng.next_u32());
    }
}

impl Default for MergeGame {
    fn default() -> Self {
        Self::new(1)
    }
}
