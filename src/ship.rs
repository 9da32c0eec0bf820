//! Ship placements on a grid.

use crate::common::ShipId;
use crate::grid::Grid;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship laid out as a straight run of cells starting at `(x, y)`.
///
/// Horizontal ships extend towards larger `x`, vertical ships towards
/// larger `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub id: ShipId,
    pub length: usize,
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(id: ShipId, length: usize, x: usize, y: usize, orientation: Orientation) -> Self {
        Self {
            id,
            length,
            x,
            y,
            orientation,
        }
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            x,
            y,
            orientation,
            length,
            ..
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    /// Returns `true` if the ship covers `(x, y)`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => y == self.y && x >= self.x && x - self.x < self.length,
            Orientation::Vertical => x == self.x && y >= self.y && y - self.y < self.length,
        }
    }

    /// Returns `true` if the ship fits inside a `rows × cols` grid. Anchors
    /// near `usize::MAX` are rejected rather than wrapped.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.y < rows && self.length <= cols && self.x <= cols - self.length
            }
            Orientation::Vertical => {
                self.x < cols && self.length <= rows && self.y <= rows - self.length
            }
        }
    }

    /// Check if every cell of the ship has been fired at.
    pub fn is_sunk(&self, shots: &Grid<bool>) -> bool {
        self.cells()
            .all(|(x, y)| shots.get(x, y).copied().unwrap_or(false))
    }
}
