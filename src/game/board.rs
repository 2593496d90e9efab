//! Occupancy Grid
//!
//! Dense row-major grid of optional team markers. Cells are write-once:
//! an occupied cell is never cleared or reassigned for the lifetime of
//! the match.

use crate::game::team::Team;

/// Board edge length in cells.
pub const BOARD_SIZE: usize = 100;

/// Square occupancy grid, row-major.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Team>>,
}

impl Board {
    /// Create an empty board with the given edge length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Edge length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether signed coordinates fall inside the board.
    ///
    /// Coordinates arrive from the wire as signed integers, so negative
    /// values are representable and must be rejected here.
    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Occupant of a cell, if any. Coordinates must be in bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Team> {
        self.cells[row * self.size + col]
    }

    /// Mark a cell for a team. Coordinates must be in bounds and the cell
    /// must be empty; occupied cells are never overwritten.
    pub fn occupy(&mut self, row: usize, col: usize, team: Team) {
        let cell = &mut self.cells[row * self.size + col];
        debug_assert!(cell.is_none(), "cell ({row}, {col}) already occupied");
        *cell = Some(team);
    }
}
