//! Game state module - the falling-block title's complete state
//!
//! Ties together board, pieces, RNG and scoring. Handles gravity timing,
//! movement, rotation, locking, line clears and game over.

use super::board::Board;
use super::pieces::{get_shape, PieceShape};
use super::scoring::{fall_interval_us, line_score};
use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rotation, Status, BOARD_WIDTH};

/// Spawn column of a piece's 4x4 box
pub const SPAWN_X: i32 = BOARD_WIDTH as i32 / 2 - 2;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Get the occupied box cells for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Check if all cells are at valid positions on the board
    pub fn fits(&self, board: &Board) -> bool {
        self.shape()
            .iter()
            .all(|&(dx, dy)| board.is_valid(self.x + dx, self.y + dy))
    }
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    pub points: u32,
    /// The next piece could not spawn.
    pub topped_out: bool,
}

/// Complete falling-block game state
#[derive(Debug, Clone)]
pub struct BlocksGame {
    board: Board,
    active: Piece,
    next: PieceKind,
    score: u32,
    lines: u32,
    status: Status,
    rng: SimpleRng,
    fall_timer_us: u64,
}

impl BlocksGame {
    /// Create a new game; the first piece is already falling
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Self::draw_kind(&mut rng);
        let next = Self::draw_kind(&mut rng);
        Self {
            board: Board::new(),
            active: Piece::new(current),
            next,
            score: 0,
            lines: 0,
            status: Status::Playing,
            rng,
            fall_timer_us: 0,
        }
    }

    fn draw_kind(rng: &mut SimpleRng) -> PieceKind {
        // next_range(7) is always a valid index
        PieceKind::from_index(rng.next_range(PieceKind::ALL.len() as u32) as usize)
            .unwrap_or(PieceKind::I)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board access for setting up positions in tests and benches
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// The previewed piece
    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current gravity interval
    pub fn fall_interval_us(&self) -> u64 {
        fall_interval_us(self.score)
    }

    /// Try to shift and/or rotate the active piece
    ///
    /// The candidate transform is checked cell by cell against bounds and
    /// occupancy; on any conflict nothing changes.
    pub fn try_move(&mut self, dx: i32, dy: i32, drot: i8) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        let candidate = Piece {
            x: self.active.x + dx,
            y: self.active.y + dy,
            rotation: self.active.rotation.turned(drot),
            ..self.active
        };
        if !candidate.fits(&self.board) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Move down one row, locking immediately if blocked
    ///
    /// Resets the gravity timer either way.
    pub fn soft_drop(&mut self) -> Option<LockOutcome> {
        if self.status != Status::Playing {
            return None;
        }
        self.fall_timer_us = 0;
        if self.try_move(0, 1, 0) {
            None
        } else {
            Some(self.lock_piece())
        }
    }

    /// Drop until blocked, then lock
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if self.status != Status::Playing {
            return None;
        }
        while self.try_move(0, 1, 0) {}
        self.fall_timer_us = 0;
        Some(self.lock_piece())
    }

    /// Row the active piece would land on
    pub fn landing_y(&self) -> i32 {
        let mut probe = self.active;
        while (Piece { y: probe.y + 1, ..probe }).fits(&self.board) {
            probe.y += 1;
        }
        probe.y
    }

    /// Lock the active piece, clear full rows, score, and spawn the next piece
    pub fn lock_piece(&mut self) -> LockOutcome {
        let active = self.active;
        let locked = self
            .board
            .lock_cells(&active.shape(), active.x, active.y, active.kind);
        debug_assert!(locked, "active piece overlapped the board at lock");

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        let points = line_score(cleared.len());
        self.score = self.score.saturating_add(points);
        self.lines += lines_cleared;

        // Preview becomes current; a fresh preview is drawn
        self.active = Piece::new(self.next);
        self.next = Self::draw_kind(&mut self.rng);

        let topped_out = !self.active.fits(&self.board);
        if topped_out {
            self.status = Status::Lost;
        }

        LockOutcome {
            lines_cleared,
            points,
            topped_out,
        }
    }

    /// Advance gravity by `elapsed_us`
    ///
    /// Returns true if the piece fell or locked.
    pub fn tick(&mut self, elapsed_us: u64) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        self.fall_timer_us += elapsed_us;
        if self.fall_timer_us < self.fall_interval_us() {
            return false;
        }
        self.fall_timer_us = 0;
        if !self.try_move(0, 1, 0) {
            self.lock_piece();
        }
        true
    }

    /// Leave the game
    pub fn exit(&mut self) {
        self.status = Status::Exited;
    }

    /// Fully re-initialize, continuing the RNG sequence
    pub fn restart(&mut self) {
        *self = Self::new(self.rng.next_u32());
    }
}

impl Default for BlocksGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(kind: PieceKind) -> BlocksGame {
        let mut game = BlocksGame::new(42);
        game.active = Piece::new(kind);
        game
    }

    #[test]
    fn test_new_game_spawns_at_center() {
        let game = BlocksGame::new(7);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.active().x, 3);
        assert_eq!(game.active().y, 0);
        assert_eq!(game.active().rotation, Rotation::North);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_try_move_walls() {
        let mut game = game_with(PieceKind::O);
        // O occupies box columns 0..2, so x can go down to 0
        for _ in 0..3 {
            assert!(game.try_move(-1, 0, 0));
        }
        assert!(!game.try_move(-1, 0, 0));
        assert_eq!(game.active().x, 0);
    }

    #[test]
    fn test_rotation_has_no_kicks() {
        let mut game = game_with(PieceKind::I);
        // Vertical I against the right wall; rotating back would poke out
        assert!(game.try_move(0, 0, 1));
        while game.try_move(1, 0, 0) {}
        let before = game.active();
        assert!(!game.try_move(0, 0, 1));
        assert_eq!(game.active(), before);
    }

    #[test]
    fn test_soft_drop_locks_when_blocked() {
        let mut game = game_with(PieceKind::O);
        while game.soft_drop().is_none() {}
        assert_eq!(game.board().filled(), 4);
        assert_eq!(game.board().get(3, 19), Some(Some(PieceKind::O)));
        assert_eq!(game.active().y, 0);
    }

    #[test]
    fn test_hard_drop_clears_line() {
        let mut game = game_with(PieceKind::I);
        for x in 0..10 {
            if !(3..7).contains(&x) {
                game.board_mut().set(x, 19, Some(PieceKind::Z));
            }
        }
        let outcome = game.hard_drop();
        assert_eq!(
            outcome,
            Some(LockOutcome {
                lines_cleared: 1,
                points: 100,
                topped_out: false
            })
        );
        assert_eq!(game.score(), 100);
        assert_eq!(game.lines(), 1);
        assert_eq!(game.board().filled(), 0);
    }

    #[test]
    fn test_vertical_i_clears_two_to_four_rows() {
        for (rows, points) in [(2, 300), (3, 500), (4, 800)] {
            let mut game = game_with(PieceKind::I);
            // Vertical I sits in box column 1, so it drops down board column 4
            assert!(game.try_move(0, 0, 1));
            for y in 20 - rows..20 {
                for x in (0..10).filter(|&x| x != 4) {
                    game.board_mut().set(x, y, Some(PieceKind::Z));
                }
            }

            let outcome = game.hard_drop();
            assert_eq!(
                outcome,
                Some(LockOutcome {
                    lines_cleared: rows as u32,
                    points,
                    topped_out: false
                }),
                "{rows} rows"
            );
            assert_eq!(game.score(), points);
            assert_eq!(game.lines(), rows as u32);
            // What is left of the I drops to the floor
            assert_eq!(game.board().filled(), 4 - rows as usize);
            for y in 20 - (4 - rows)..20 {
                assert_eq!(game.board().get(4, y), Some(Some(PieceKind::I)));
            }
        }
    }

    #[test]
    fn test_tick_respects_interval() {
        let mut game = game_with(PieceKind::T);
        assert!(!game.tick(999_999));
        assert_eq!(game.active().y, 0);
        assert!(game.tick(1));
        assert_eq!(game.active().y, 1);
    }

    #[test]
    fn test_top_out_is_lost() {
        let mut game = game_with(PieceKind::O);
        // Stack up to row 3, leaving column 0 open so nothing clears
        for y in 3..20 {
            for x in 1..10 {
                game.board_mut().set(x, y, Some(PieceKind::J));
            }
        }
        // The O lands on rows 1..=2 and every spawn shape needs row 1 at x 3 or 4
        let outcome = game.hard_drop();
        assert_eq!(
            outcome,
            Some(LockOutcome {
                lines_cleared: 0,
                points: 0,
                topped_out: true
            })
        );
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.hard_drop(), None);
        assert!(!game.try_move(-1, 0, 0));
        assert!(!game.tick(2_000_000));
    }

    #[test]
    fn test_landing_y_stops_on_the_stack() {
        let mut game = game_with(PieceKind::O);
        assert_eq!(game.landing_y(), 18);
        game.board_mut().set(4, 12, Some(PieceKind::S));
        assert_eq!(game.landing_y(), 10);
        // Probing does not move the piece
        assert_eq!(game.active().y, 0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = game_with(PieceKind::I);
        game.hard_drop();
        game.exit();
        game.restart();
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.board().filled(), 0);
        assert_eq!(game.score(), 0);
    }
}
