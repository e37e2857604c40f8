//! Pieces module - static 4x4 occupancy bitmaps
//!
//! Each (kind, rotation) pair maps to a 16-bit mask read row by row from the
//! top of a 4x4 box; within a row the high bit is the leftmost column.
//! Rotation simply indexes the next mask. There are no wall kicks.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece's 4x4 box
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets from the box origin
pub type PieceShape = [CellOffset; 4];

/// Masks indexed by `[kind][rotation]`, in `PieceKind::ALL` order.
const SHAPES: [[u16; 4]; 7] = [
    // I
    [0x0F00, 0x4444, 0x0F00, 0x4444],
    // O
    [0xCC00, 0xCC00, 0xCC00, 0xCC00],
    // T
    [0x4E00, 0x4C40, 0x0E40, 0x4640],
    // L
    [0x44C0, 0x8E00, 0xC880, 0xE200],
    // J
    [0x88C0, 0xE800, 0xC440, 0x2E00],
    // S
    [0x6C00, 0x8C40, 0x6C00, 0x8C40],
    // Z
    [0xC600, 0x4C80, 0xC600, 0x4C80],
];

/// Raw occupancy mask for a piece
pub fn mask(kind: PieceKind, rotation: Rotation) -> u16 {
    SHAPES[kind.index()][rotation.index()]
}

/// Whether box cell (x, y) is occupied, for x and y in 0..4
pub fn occupies(kind: PieceKind, rotation: Rotation, x: usize, y: usize) -> bool {
    x < 4 && y < 4 && mask(kind, rotation) & (0x8000 >> (y * 4 + x)) != 0
}

/// Get the occupied cells of a piece in row-major order
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut out = [(0, 0); 4];
    let mut n = 0;
    for y in 0..4 {
        for x in 0..4 {
            if occupies(kind, rotation, x, y) {
                debug_assert!(n < 4, "piece bitmap with more than four cells");
                if n < 4 {
                    out[n] = (x as i32, y as i32);
                }
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "piece bitmap with fewer than four cells");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_bitmap_has_four_cells() {
        for kind in PieceKind::ALL {
            for rot in ROTATIONS {
                assert_eq!(mask(kind, rot).count_ones(), 4, "{kind:?} {rot:?}");
            }
        }
    }

    #[test]
    fn i_piece_lies_on_second_row() {
        assert_eq!(
            get_shape(PieceKind::I, Rotation::North),
            [(0, 1), (1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(
            get_shape(PieceKind::I, Rotation::East),
            [(1, 0), (1, 1), (1, 2), (1, 3)]
        );
    }

    #[test]
    fn t_piece_points_up_at_spawn() {
        assert_eq!(
            get_shape(PieceKind::T, Rotation::North),
            [(1, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let base = get_shape(PieceKind::O, Rotation::North);
        for rot in ROTATIONS {
            assert_eq!(get_shape(PieceKind::O, rot), base);
        }
    }

    #[test]
    fn occupies_rejects_outside_box() {
        assert!(!occupies(PieceKind::O, Rotation::North, 4, 0));
        assert!(occupies(PieceKind::O, Rotation::North, 0, 0));
    }
}
