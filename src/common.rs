//! Common types for Broadside: errors and the per-cell markers of both grids.

use core::fmt;

/// Identifier of a ship class. By convention it equals the ship's length.
pub type ShipId = u8;

/// Errors returned by board setup and attack strategy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimensions must both be positive.
    InvalidDimensions { rows: usize, cols: usize },
    /// Ship identifier or length is zero.
    InvalidShip { id: ShipId },
    /// Fleet text could not be parsed.
    InvalidFleetSpec,
    /// Ship identifier is not part of the fleet.
    UnknownShip { id: ShipId },
    /// Every instance of this ship class is already on the board.
    ShipAlreadyPlaced { id: ShipId },
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement sits side by side with another ship.
    ShipTouches,
    /// Coordinate outside `[0, cols) × [0, rows)`.
    OutOfBounds { x: usize, y: usize },
    /// Random placement gave up for this ship.
    PlacementFailure { id: ShipId, attempts: usize },
    /// No unknown cell is left to attack.
    ExhaustedBoard,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid grid dimensions {}x{}", rows, cols)
            }
            BoardError::InvalidShip { id } => {
                write!(f, "Ship {} must have a non-zero id and length", id)
            }
            BoardError::InvalidFleetSpec => write!(f, "Fleet must look like `4:1,3:2`"),
            BoardError::UnknownShip { id } => write!(f, "Ship {} is not in the fleet", id),
            BoardError::ShipAlreadyPlaced { id } => {
                write!(f, "All ships with id {} are already placed", id)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTouches => write!(f, "Ship placement touches another ship"),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinates out of bounds: x={}, y={}", x, y)
            }
            BoardError::PlacementFailure { id, attempts } => {
                write!(f, "Unable to place ship {} after {} attempts", id, attempts)
            }
            BoardError::ExhaustedBoard => write!(f, "No valid attack spots left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Contents of a defender's cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Water,
    Ship(ShipId),
}

impl Tile {
    pub fn is_water(&self) -> bool {
        matches!(self, Tile::Water)
    }

    /// Ship occupying the cell, if any.
    pub fn ship_id(&self) -> Option<ShipId> {
        match self {
            Tile::Water => None,
            Tile::Ship(id) => Some(*id),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Water => write!(f, "."),
            Tile::Ship(id) => write!(f, "{}", id),
        }
    }
}

/// What the attacker knows about one cell of the enemy board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Knowledge {
    #[default]
    Unknown,
    Hit,
    Miss,
    /// Next to a sunk ship, so it cannot hold another one.
    Excluded,
}

impl Knowledge {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Knowledge::Unknown)
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Knowledge::Unknown => '?',
            Knowledge::Hit => 'H',
            Knowledge::Miss => 'M',
            Knowledge::Excluded => 'X',
        };
        write!(f, "{}", ch)
    }
}

/// Counts of empty and occupied cells on a defender's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub empty_spaces: usize,
    pub occupied_spaces: usize,
}
