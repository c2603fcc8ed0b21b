//! Rectangular cell matrix and its dihedral transforms
//!
//! Every transform returns an independent copy; the source grid is never touched.

use std::fmt;

use crate::types::Coord;

/// Row-major board matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Clone> Grid<C> {
    /// Creates a grid with every cell set to `fill`
    pub fn filled(rows: usize, cols: usize, fill: C) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Builds a grid from nested rows. Returns None when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Grid {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, at: Coord) -> Option<&C> {
        if at.row >= self.rows || at.col >= self.cols {
            return None;
        }
        self.cells.get(at.row * self.cols + at.col)
    }

    pub fn set(&mut self, at: Coord, value: C) {
        if at.row < self.rows && at.col < self.cols {
            self.cells[at.row * self.cols + at.col] = value;
        }
    }

    /// Iterates over every cell with its coordinate
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &C)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / cols, i % cols), cell))
    }

    pub fn to_rows(&self) -> Vec<Vec<C>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.cols).map(<[C]>::to_vec).collect()
    }

    fn remap(&self, rows: usize, cols: usize, source: impl Fn(usize, usize) -> usize) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..rows {
            for c in 0..cols {
                cells.push(self.cells[source(r, c)].clone());
            }
        }
        Grid { rows, cols, cells }
    }

    /// Quarter turn clockwise; a rows x cols grid becomes cols x rows
    pub fn rotate_clockwise(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        self.remap(cols, rows, |r, c| (rows - 1 - c) * cols + r)
    }

    /// Reverses every row (reflection across the vertical axis)
    pub fn mirror_vertical(&self) -> Self {
        let cols = self.cols;
        self.remap(self.rows, cols, |r, c| r * cols + (cols - 1 - c))
    }

    /// Reverses the order of rows (reflection across the horizontal axis)
    pub fn mirror_horizontal(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        self.remap(rows, cols, |r, c| (rows - 1 - r) * cols + c)
    }

    /// All 8 members of the dihedral group: the identity and its three rotations,
    /// followed by the vertical mirror and its three rotations
    pub fn dihedral_variants(&self) -> Vec<Self> {
        let mut variants = Vec::with_capacity(8);
        for base in [self.clone(), self.mirror_vertical()] {
            let mut current = base;
            for _ in 0..4 {
                let next = current.rotate_clockwise();
                variants.push(current);
                current = next;
            }
        }
        variants
    }
}

impl<C: fmt::Display> fmt::Display for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", self.cells[r * self.cols + c])?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<u8> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_rotate_clockwise_layout() {
        let rotated = sample().rotate_clockwise();
        assert_eq!(rotated.rows(), 3);
        assert_eq!(rotated.cols(), 2);
        assert_eq!(rotated.to_rows(), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let grid = sample();
        let mut turned = grid.clone();
        for _ in 0..4 {
            turned = turned.rotate_clockwise();
        }
        assert_eq!(turned, grid);
    }

    #[test]
    fn test_mirrors_are_involutions() {
        let grid = sample();
        assert_eq!(grid.mirror_vertical().to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
        assert_eq!(grid.mirror_horizontal().to_rows(), vec![vec![4, 5, 6], vec![1, 2, 3]]);
        assert_eq!(grid.mirror_vertical().mirror_vertical(), grid);
        assert_eq!(grid.mirror_horizontal().mirror_horizontal(), grid);
    }

    #[test]
    fn test_dihedral_variants_of_asymmetric_square_are_distinct() {
        let grid = Grid::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ])
        .unwrap();
        let variants = grid.dihedral_variants();
        assert_eq!(variants.len(), 8);
        assert_eq!(variants[0], grid);
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(variants.contains(&grid.mirror_horizontal()));
    }

    #[test]
    fn test_transforms_leave_source_untouched() {
        let grid = sample();
        let snapshot = grid.clone();
        let _ = grid.dihedral_variants();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }
}
