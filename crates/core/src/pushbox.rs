//! Pushbox module - the grid push-puzzle
//!
//! Two layers: an immutable base (floor, wall, target) and a mutable overlay
//! (nothing, box, player). Levels are written in the usual push-puzzle text
//! notation:
//!
//! | Char | Base | Overlay |
//! |------|------|---------|
//! | `#` | wall | |
//! | ` ` | floor | |
//! | `.` | target | |
//! | `$` | floor | box |
//! | `@` | floor | player |
//! | `*` | target | box |
//! | `+` | target | player |

use core::fmt;

use crate::grid::Grid;
use crate::types::{Direction, Status, PUSHBOX_SIZE};

const N: usize = PUSHBOX_SIZE;

/// The built-in level: five boxes, five targets
pub const DEFAULT_LEVEL: [&str; PUSHBOX_SIZE] = [
    "##########",
    "##########",
    "####  # @#",
    "###   #  #",
    "###$ $ $ #",
    "### $##  #",
    "### $ # ##",
    "#.....  ##",
    "##########",
    "##########",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    #[default]
    Floor,
    Wall,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Empty,
    Box,
    Player,
}

/// Outcome of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Blocked,
    Walked,
    Pushed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    RowCount { expected: usize, actual: usize },
    RowWidth { row: usize, expected: usize, actual: usize },
    UnknownTile { row: usize, col: usize, ch: char },
    PlayerCount { found: usize },
    NoTargets,
    TooFewBoxes { boxes: usize, targets: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { expected, actual } => {
                write!(f, "level has {actual} rows, expected {expected}")
            }
            Self::RowWidth {
                row,
                expected,
                actual,
            } => write!(f, "row {row} is {actual} tiles wide, expected {expected}"),
            Self::UnknownTile { row, col, ch } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            }
            Self::PlayerCount { found } => {
                write!(f, "level needs exactly one player, found {found}")
            }
            Self::NoTargets => write!(f, "level has no targets"),
            Self::TooFewBoxes { boxes, targets } => {
                write!(f, "level has {boxes} boxes for {targets} targets")
            }
        }
    }
}

impl std::error::Error for LevelError {}

fn parse_tile(ch: char) -> Option<(Base, Overlay)> {
    Some(match ch {
        '#' => (Base::Wall, Overlay::Empty),
        ' ' => (Base::Floor, Overlay::Empty),
        '.' => (Base::Target, Overlay::Empty),
        '$' => (Base::Floor, Overlay::Box),
        '@' => (Base::Floor, Overlay::Player),
        '*' => (Base::Target, Overlay::Box),
        '+' => (Base::Target, Overlay::Player),
        _ => return None,
    })
}

/// Complete push-puzzle state
#[derive(Debug, Clone)]
pub struct PushboxGame {
    base: Grid<Base, N, N>,
    overlay: Grid<Overlay, N, N>,
    player: (i32, i32),
    moves: u32,
    boxes_on_target: usize,
    total_targets: usize,
    status: Status,
    start_overlay: Grid<Overlay, N, N>,
    start_player: (i32, i32),
}

impl PushboxGame {
    /// The built-in level
    pub fn new() -> Self {
        match Self::from_rows(&DEFAULT_LEVEL) {
            Ok(game) => game,
            Err(err) => unreachable!("built-in level is malformed: {err}"),
        }
    }

    /// Parse a level from text rows
    pub fn from_rows(rows: &[&str]) -> Result<Self, LevelError> {
        if rows.len() != N {
            return Err(LevelError::RowCount {
                expected: N,
                actual: rows.len(),
            });
        }

        let mut base = Grid::new(Base::Wall);
        let mut overlay = Grid::new(Overlay::Empty);
        let mut players = 0;
        let mut player = (0, 0);
        let mut boxes = 0;

        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != N {
                return Err(LevelError::RowWidth {
                    row: y,
                    expected: N,
                    actual: width,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let (b, o) = parse_tile(ch).ok_or(LevelError::UnknownTile {
                    row: y,
                    col: x,
                    ch,
                })?;
                base.set(x as i32, y as i32, b);
                overlay.set(x as i32, y as i32, o);
                match o {
                    Overlay::Player => {
                        players += 1;
                        player = (x as i32, y as i32);
                    }
                    Overlay::Box => boxes += 1,
                    Overlay::Empty => {}
                }
            }
        }

        if players != 1 {
            return Err(LevelError::PlayerCount { found: players });
        }
        let total_targets = base.count(|b| b == Base::Target);
        if total_targets == 0 {
            return Err(LevelError::NoTargets);
        }
        if boxes < total_targets {
            return Err(LevelError::TooFewBoxes {
                boxes,
                targets: total_targets,
            });
        }

        let mut game = Self {
            base,
            overlay,
            player,
            moves: 0,
            boxes_on_target: 0,
            total_targets,
            status: Status::Playing,
            start_overlay: overlay,
            start_player: player,
        };
        game.boxes_on_target = game.count_boxes_on_target();
        game.check_win();
        Ok(game)
    }

    fn count_boxes_on_target(&self) -> usize {
        self.overlay
            .iter()
            .filter(|&(x, y, o)| o == Overlay::Box && self.base.get(x, y) == Some(Base::Target))
            .count()
    }

    pub fn base(&self, x: i32, y: i32) -> Option<Base> {
        self.base.get(x, y)
    }

    pub fn overlay(&self, x: i32, y: i32) -> Option<Overlay> {
        self.overlay.get(x, y)
    }

    pub fn player(&self) -> (i32, i32) {
        self.player
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn boxes_on_target(&self) -> usize {
        self.boxes_on_target
    }

    pub fn total_targets(&self) -> usize {
        self.total_targets
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn is_target(&self, x: i32, y: i32) -> bool {
        self.base.get(x, y) == Some(Base::Target)
    }

    /// Move in a direction, pushing a box if one is in the way
    pub fn step(&mut self, dir: Direction) -> MoveResult {
        let (dx, dy) = dir.delta();
        self.move_player(dx, dy)
    }

    /// Move the player by `(dx, dy)`
    ///
    /// Blocked by walls, the grid edge, and boxes that cannot move on into an
    /// in-bounds, non-wall, empty cell.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> MoveResult {
        if self.status != Status::Playing {
            return MoveResult::Blocked;
        }
        let (px, py) = self.player;
        let (nx, ny) = (px + dx, py + dy);

        match self.base.get(nx, ny) {
            None | Some(Base::Wall) => return MoveResult::Blocked,
            Some(_) => {}
        }

        let result = match self.overlay.get(nx, ny) {
            Some(Overlay::Box) => {
                let (bx, by) = (nx + dx, ny + dy);
                let free = matches!(self.base.get(bx, by), Some(Base::Floor | Base::Target))
                    && self.overlay.get(bx, by) == Some(Overlay::Empty);
                if !free {
                    return MoveResult::Blocked;
                }
                let was_on = self.is_target(nx, ny);
                let now_on = self.is_target(bx, by);
                self.overlay.set(bx, by, Overlay::Box);
                match (was_on, now_on) {
                    (false, true) => self.boxes_on_target += 1,
                    (true, false) => self.boxes_on_target -= 1,
                    _ => {}
                }
                MoveResult::Pushed
            }
            _ => MoveResult::Walked,
        };

        self.overlay.set(px, py, Overlay::Empty);
        self.overlay.set(nx, ny, Overlay::Player);
        self.player = (nx, ny);
        self.moves += 1;
        self.check_win();
        result
    }

    fn check_win(&mut self) {
        if self.status == Status::Playing && self.boxes_on_target == self.total_targets {
            self.status = Status::Won;
        }
    }

    pub fn exit(&mut self) {
        self.status = Status::Exited;
    }

    /// Back to the level's starting layout
    pub fn restart(&mut self) {
        self.overlay = self.start_overlay;
        self.player = self.start_player;
        self.moves = 0;
        self.status = Status::Playing;
        self.boxes_on_target = self.count_boxes_on_target();
        self.check_win();
    }
}

impl Default for PushboxGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: [&str; N] = [
        "##########",
        "#@$ .    #",
        "#        #",
        "#        #",
        "#        #",
        "#        #",
        "#        #",
        "#        #",
        "#        #",
        "##########",
    ];

    #[test]
    fn test_default_level_parses() {
        let game = PushboxGame::new();
        assert_eq!(game.player(), (8, 2));
        assert_eq!(game.total_targets(), 5);
        assert_eq!(game.boxes_on_target(), 0);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_walk_and_wall() {
        let mut game = PushboxGame::new();
        assert_eq!(game.step(Direction::Right), MoveResult::Blocked);
        assert_eq!(game.step(Direction::Up), MoveResult::Blocked);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.step(Direction::Down), MoveResult::Walked);
        assert_eq!(game.player(), (8, 3));
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_push_onto_target_and_win() {
        let mut game = PushboxGame::from_rows(&CORRIDOR).expect("level");
        assert_eq!(game.step(Direction::Right), MoveResult::Pushed);
        assert_eq!(game.overlay(3, 1), Some(Overlay::Box));
        assert_eq!(game.boxes_on_target(), 0);
        assert_eq!(game.step(Direction::Right), MoveResult::Pushed);
        assert_eq!(game.boxes_on_target(), 1);
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.step(Direction::Left), MoveResult::Blocked);
    }

    #[test]
    fn test_push_off_target_decrements() {
        let mut rows = CORRIDOR;
        rows[1] = "#@*     .#";
        rows[2] = "#  $     #";
        let mut game = PushboxGame::from_rows(&rows).expect("level");
        assert_eq!(game.total_targets(), 2);
        assert_eq!(game.boxes_on_target(), 1);
        assert_eq!(game.step(Direction::Right), MoveResult::Pushed);
        assert_eq!(game.boxes_on_target(), 0);
        assert_eq!(game.status(), Status::Playing);
        game.exit();
        assert_eq!(game.status(), Status::Exited);
    }

    #[test]
    fn test_push_into_box_or_wall_is_blocked() {
        let mut rows = CORRIDOR;
        rows[1] = "#@$$.    #";
        rows[2] = "#       .#";
        let mut game = PushboxGame::from_rows(&rows).expect("level");
        assert_eq!(game.step(Direction::Right), MoveResult::Blocked);
        assert_eq!(game.player(), (1, 1));
        assert_eq!(game.overlay(2, 1), Some(Overlay::Box));
        assert_eq!(game.overlay(3, 1), Some(Overlay::Box));

        rows[1] = "#  @$#   #";
        let mut game = PushboxGame::from_rows(&rows).expect("level");
        assert_eq!(game.step(Direction::Right), MoveResult::Blocked);
        assert_eq!(game.overlay(4, 1), Some(Overlay::Box));
    }

    #[test]
    fn test_restart_restores_layout() {
        let mut game = PushboxGame::from_rows(&CORRIDOR).expect("level");
        game.step(Direction::Right);
        game.step(Direction::Right);
        game.restart();
        assert_eq!(game.player(), (1, 1));
        assert_eq!(game.overlay(2, 1), Some(Overlay::Box));
        assert_eq!(game.overlay(4, 1), Some(Overlay::Empty));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_level_errors() {
        assert_eq!(
            PushboxGame::from_rows(&CORRIDOR[..9]).err(),
            Some(LevelError::RowCount {
                expected: 10,
                actual: 9
            })
        );

        let mut rows = CORRIDOR;
        rows[3] = "#  ?     #";
        assert_eq!(
            PushboxGame::from_rows(&rows).err(),
            Some(LevelError::UnknownTile {
                row: 3,
                col: 3,
                ch: '?'
            })
        );

        let mut rows = CORRIDOR;
        rows[3] = "#  @     #";
        assert_eq!(
            PushboxGame::from_rows(&rows).err(),
            Some(LevelError::PlayerCount { found: 2 })
        );

        let mut rows = CORRIDOR;
        rows[4] = "#   .    #";
        assert_eq!(
            PushboxGame::from_rows(&rows).err(),
            Some(LevelError::TooFewBoxes {
                boxes: 1,
                targets: 2
            })
        );

        let mut rows = CORRIDOR;
        rows[5] = "#    ";
        let err = PushboxGame::from_rows(&rows).err().expect("error");
        assert_eq!(err.to_string(), "row 5 is 5 tiles wide, expected 10");
    }
}
