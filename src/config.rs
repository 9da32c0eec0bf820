use crate::common::BoardError;
use crate::fleet::Fleet;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

/// Random tries granted to each ship instance, per grid cell.
pub const PLACEMENT_ATTEMPTS_PER_CELL: usize = 16;

/// Standard fleet: one 4-decker, two 3-deckers, three 2-deckers and four
/// single-cell ships, largest first.
pub fn default_fleet() -> Fleet {
    Fleet::new()
        .with_ship(4, 1)
        .with_ship(3, 2)
        .with_ship(2, 3)
        .with_ship(1, 4)
}

/// Grid size and fleet shared by a defender and the attacker facing it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fleet: Fleet,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, fleet: Fleet) -> Self {
        Self { rows, cols, fleet }
    }

    /// Check dimensions are positive and every ship is well formed.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.fleet.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, default_fleet())
    }
}
