//! Mines module - the mine-sweeper reveal engine
//!
//! A 16x16 field with 40 mines. Adjacent-mine counts are computed once when the
//! field is laid out. Revealing a cell with no adjacent mines floods outward
//! through its zero region and stops at the numbered cells bordering it. The
//! flood runs on an explicit bounded stack: each cell is pushed at most once,
//! so the stack never holds more entries than the field has cells.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Direction, Status, MINES_SIZE, MINE_COUNT};

const N: usize = MINES_SIZE;
const CELLS: usize = N * N;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MineCell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mines among the 8 neighbours.
    pub adjacent: u8,
}

/// Outcome of a player reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Already revealed, flagged, out of bounds, or the game is over.
    Ignored,
    /// Number of safe cells newly revealed.
    Revealed(usize),
    Exploded,
}

/// Complete mine-sweeper state
#[derive(Debug, Clone)]
pub struct MinesGame {
    field: Grid<MineCell, N, N>,
    cursor: (i32, i32),
    mine_total: usize,
    revealed_count: usize,
    flagged_count: usize,
    status: Status,
    rng: SimpleRng,
}

impl MinesGame {
    /// Random layout of [`MINE_COUNT`] mines
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut field: Grid<MineCell, N, N> = Grid::default();
        let mut placed = 0;
        while placed < MINE_COUNT {
            let x = rng.next_range(N as u32) as i32;
            let y = rng.next_range(N as u32) as i32;
            if let Some(cell) = field.get_mut(x, y) {
                if !cell.has_mine {
                    cell.has_mine = true;
                    placed += 1;
                }
            }
        }
        Self::from_field(field, placed, rng)
    }

    /// Fixed layout; duplicate and out-of-bounds positions are skipped
    pub fn with_mines(mines: &[(i32, i32)]) -> Self {
        let mut field: Grid<MineCell, N, N> = Grid::default();
        let mut placed = 0;
        for &(x, y) in mines {
            if let Some(cell) = field.get_mut(x, y) {
                if !cell.has_mine {
                    cell.has_mine = true;
                    placed += 1;
                }
            }
        }
        Self::from_field(field, placed, SimpleRng::default())
    }

    fn from_field(mut field: Grid<MineCell, N, N>, mine_total: usize, rng: SimpleRng) -> Self {
        for y in 0..N as i32 {
            for x in 0..N as i32 {
                let adjacent = Grid::<MineCell, N, N>::neighbors8(x, y)
                    .filter(|&(nx, ny)| field.get(nx, ny).map_or(false, |c| c.has_mine))
                    .count() as u8;
                if let Some(cell) = field.get_mut(x, y) {
                    cell.adjacent = adjacent;
                }
            }
        }
        Self {
            field,
            cursor: (N as i32 / 2, N as i32 / 2),
            mine_total,
            revealed_count: 0,
            flagged_count: 0,
            status: Status::Playing,
            rng,
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<MineCell> {
        self.field.get(x, y)
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn mine_total(&self) -> usize {
        self.mine_total
    }

    /// Safe cells revealed so far
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_count
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn safe_cells(&self) -> usize {
        CELLS - self.mine_total
    }

    /// Move the cursor one cell, clamped to the field
    pub fn move_cursor(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        let max = N as i32 - 1;
        self.cursor = (
            (self.cursor.0 + dx).clamp(0, max),
            (self.cursor.1 + dy).clamp(0, max),
        );
    }

    /// Reveal one cell, clearing any flag on it; true if it was hidden
    fn uncover(&mut self, x: i32, y: i32) -> bool {
        let Some(cell) = self.field.get_mut(x, y) else {
            return false;
        };
        if cell.revealed {
            return false;
        }
        cell.revealed = true;
        if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
        }
        if !cell.has_mine {
            self.revealed_count += 1;
        }
        true
    }

    /// Flood reveal from `(x, y)`
    ///
    /// Returns the number of safe cells newly revealed. Revealed cells stop
    /// the flood; zero-count cells spread it to their in-bounds neighbours.
    pub fn flood_reveal(&mut self, x: i32, y: i32) -> usize {
        let before = self.revealed_count;
        let mut stack: ArrayVec<(i32, i32), CELLS> = ArrayVec::new();

        if !self.uncover(x, y) {
            return 0;
        }
        if self.field.get(x, y).map_or(false, |c| c.adjacent == 0) {
            stack.push((x, y));
        }

        while let Some((cx, cy)) = stack.pop() {
            for (nx, ny) in Grid::<MineCell, N, N>::neighbors8(cx, cy) {
                if !self.uncover(nx, ny) {
                    continue;
                }
                if self.field.get(nx, ny).map_or(false, |c| c.adjacent == 0) {
                    // Each cell is uncovered once, so the stack cannot overflow
                    let _ = stack.try_push((nx, ny));
                }
            }
        }
        self.revealed_count - before
    }

    /// Player reveal; ignores revealed and flagged cells
    pub fn reveal(&mut self, x: i32, y: i32) -> RevealOutcome {
        if self.status != Status::Playing {
            return RevealOutcome::Ignored;
        }
        match self.field.get(x, y) {
            Some(cell) if !cell.revealed && !cell.flagged => {}
            _ => return RevealOutcome::Ignored,
        }

        let newly = self.flood_reveal(x, y);
        if self.field.get(x, y).map_or(false, |c| c.has_mine) {
            self.status = Status::Lost;
            self.reveal_all_mines();
            return RevealOutcome::Exploded;
        }
        if self.revealed_count == self.safe_cells() {
            self.status = Status::Won;
        }
        RevealOutcome::Revealed(newly)
    }

    pub fn reveal_at_cursor(&mut self) -> RevealOutcome {
        let (x, y) = self.cursor;
        self.reveal(x, y)
    }

    /// Toggle a flag on a hidden cell; true if it changed
    pub fn toggle_flag(&mut self, x: i32, y: i32) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        let Some(cell) = self.field.get_mut(x, y) else {
            return false;
        };
        if cell.revealed {
            return false;
        }
        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        if self.flagged_count == self.mine_total && self.all_flags_correct() {
            self.status = Status::Won;
        }
        true
    }

    pub fn toggle_flag_at_cursor(&mut self) -> bool {
        let (x, y) = self.cursor;
        self.toggle_flag(x, y)
    }

    fn all_flags_correct(&self) -> bool {
        self.field
            .iter()
            .all(|(_, _, c)| c.has_mine == c.flagged)
    }

    fn reveal_all_mines(&mut self) {
        for y in 0..N as i32 {
            for x in 0..N as i32 {
                if let Some(cell) = self.field.get_mut(x, y) {
                    if cell.has_mine {
                        cell.revealed = true;
                    }
                }
            }
        }
    }

    pub fn exit(&mut self) {
        self.status = Status::Exited;
    }

    /// Fresh random layout, continuing the RNG sequence
    pub fn restart(&mut self) {
        *self = Self::new(self.rng.next_u32());
    }
}

impl Default for MinesGame {
    fn default() -> Self {
        Self::new(1)
    }
}
