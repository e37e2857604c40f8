//! Grid module - fixed-size, bounds-checked 2D storage
//!
//! Every title that keeps a board stores it in a `Grid`. The grid is allocated
//! once, mutated in place, and never resized. All access goes through signed
//! coordinates that are checked against `[0, W) x [0, H)` first, so a
//! neighbour probe like `(x - 1, y)` at the left edge is simply `None`.

/// Fixed W x H grid stored as rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid<T: Copy, const W: usize, const H: usize> {
    rows: [[T; W]; H],
}

impl<T: Copy, const W: usize, const H: usize> Grid<T, W, H> {
    /// Create a grid with every cell set to `fill`
    pub fn new(fill: T) -> Self {
        Self {
            rows: [[fill; W]; H],
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// Check that `(x, y)` lies inside the grid
    #[inline(always)]
    pub fn contains(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < W && (y as usize) < H
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        if !Self::contains(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        if !Self::contains(x, y) {
            return None;
        }
        Some(&mut self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, value: T) {
        for row in &mut self.rows {
            row.fill(value);
        }
    }

    pub fn row(&self, y: usize) -> Option<&[T; W]> {
        self.rows.get(y)
    }

    pub fn rows(&self) -> &[[T; W]; H] {
        &self.rows
    }

    /// Copy row `src` over row `dst`. Out-of-range indices are ignored.
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        if src < H && dst < H {
            self.rows[dst] = self.rows[src];
        }
    }

    pub fn fill_row(&mut self, y: usize, value: T) {
        if let Some(row) = self.rows.get_mut(y) {
            row.fill(value);
        }
    }

    /// Iterate `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &v)| (x as i32, y as i32, v))
        })
    }

    /// In-bounds 8-neighbourhood of `(x, y)`.
    pub fn neighbors8(x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| Self::contains(nx, ny))
    }

    pub fn count(&self, mut pred: impl FnMut(T) -> bool) -> usize {
        self.rows.iter().flatten().filter(|&&v| pred(v)).count()
    }
}

impl<T: Copy + Default, const W: usize, const H: usize> Default for Grid<T, W, H> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_independent_snapshots() {
        let mut g: Grid<u8, 2, 2> = Grid::new(1);
        let saved = g;
        g.set(1, 1, 7);
        assert_eq!(saved.get(1, 1), Some(1));
        g = saved;
        assert_eq!(g, saved);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut g: Grid<u8, 3, 2> = Grid::new(0);
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(0, -1), None);
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(0, 2), None);
        assert!(!g.set(3, 1, 9));
        assert!(g.set(2, 1, 9));
        assert_eq!(g.get(2, 1), Some(9));
    }

    #[test]
    fn corner_has_three_neighbors() {
        let n: Vec<_> = Grid::<u8, 4, 4>::neighbors8(0, 0).collect();
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 1)));
        assert_eq!(Grid::<u8, 4, 4>::neighbors8(1, 1).count(), 8);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g: Grid<u8, 2, 2> = Grid::new(0);
        g.set(1, 0, 1);
        g.set(0, 1, 2);
        let v: Vec<_> = g.iter().collect();
        assert_eq!(v, vec![(0, 0, 0), (1, 0, 1), (0, 1, 2), (1, 1, 0)]);
    }

    #[test]
    fn copy_row_ignores_bad_indices() {
        let mut g: Grid<u8, 2, 2> = Grid::new(0);
        g.fill_row(0, 7);
        g.copy_row(0, 1);
        g.copy_row(0, 5);
        assert_eq!(g.row(1), Some(&[7, 7]));
        assert_eq!(g.count(|v| v == 7), 4);
    }
}
