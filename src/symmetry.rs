//! Duplicate-branch filter for the root move loop
//!
//! Two root moves whose resulting boards coincide under any of the 8 dihedral
//! transforms lead to game-theoretically identical subtrees, so only the first
//! one is searched. The table lives for a single depth iteration.

use std::collections::HashSet;
use std::hash::Hash;

use crate::grid::Grid;

#[derive(Debug)]
pub struct SymmetryTable<C> {
    seen: HashSet<Grid<C>>,
}

impl<C: Clone + Eq + Hash> SymmetryTable<C> {
    pub fn new() -> Self {
        SymmetryTable {
            seen: HashSet::new(),
        }
    }

    /// True when this exact board matrix (or a transform of an earlier one) was recorded
    pub fn contains(&self, grid: &Grid<C>) -> bool {
        self.seen.contains(grid)
    }

    /// Records a searched board together with its 7 symmetric variants
    pub fn record(&mut self, grid: &Grid<C>) {
        self.seen.extend(grid.dihedral_variants());
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<C: Clone + Eq + Hash> Default for SymmetryTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_recognises_rotated_and_mirrored_boards() {
        let mut table = SymmetryTable::new();
        table.record(&grid(&["1..", "...", "..2"]));

        assert!(table.contains(&grid(&["1..", "...", "..2"])));
        assert!(table.contains(&grid(&["..1", "...", "2.."])));
        assert!(table.contains(&grid(&["2..", "...", "..1"])));
        assert!(!table.contains(&grid(&["1..", "..2", "..."])));
    }

    #[test]
    fn test_symmetric_board_collapses_variants() {
        let mut table = SymmetryTable::new();
        table.record(&grid(&["...", ".1.", "..."]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_starts_empty() {
        let table: SymmetryTable<char> = SymmetryTable::default();
        assert!(table.is_empty());
    }
}
