//! A heap-backed `rows × cols` grid shared by the setup board and the
//! attacker's knowledge board.
//!
//! Coordinates are `(x, y)` = `(column, row)`, both zero-indexed. Cells are
//! stored row-major so iteration order is the scan order used by the attack
//! policy.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;

/// A rectangular grid of cells of type `T`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value.clone();
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.contains(x, y) {
            Ok(y * self.cols + x)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Gets the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T, BoardError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Replaces the cell at column `x`, row `y`, returning the old value.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<T, BoardError> {
        let idx = self.index(x, y)?;
        Ok(core::mem::replace(&mut self.cells[idx], value))
    }

    /// Cells of row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y < self.rows {
            Some(&self.cells[y * self.cols..(y + 1) * self.cols])
        } else {
            None
        }
    }

    /// Row-major iterator over `((x, y), &cell)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % cols, i / cols), cell))
    }

    /// Number of cells matching `pred`.
    pub fn count<F: Fn(&T) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// In-bounds orthogonal neighbours of `(x, y)` in the order left, right,
    /// up, down.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let left = x.checked_sub(1).map(|nx| (nx, y));
        let right = (x + 1 < self.cols).then(|| (x + 1, y));
        let up = y.checked_sub(1).map(|ny| (x, ny));
        let down = (y + 1 < self.rows).then(|| (x, y + 1));
        [left, right, up, down].into_iter().flatten()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[y * self.cols + x])?;
            }
            if y + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}
