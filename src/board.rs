//! Defender board: random fleet layout with non-overlap and non-touching
//! constraints.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, BoardStats, ShipId, Tile};
use crate::config::{GameConfig, PLACEMENT_ATTEMPTS_PER_CELL};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::ship::{Orientation, Placement};

/// Owns a grid of ship identifiers and places a fleet on it.
#[derive(Clone)]
pub struct BoardSetup {
    board: Grid<Tile>,
    fleet: Fleet,
    placements: Vec<Placement>,
    max_attempts: usize,
}

impl BoardSetup {
    /// Create an empty `rows × cols` board for `fleet`.
    pub fn new(rows: usize, cols: usize, fleet: Fleet) -> Result<Self, BoardError> {
        GameConfig::new(rows, cols, fleet).try_into()
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        config.clone().try_into()
    }

    /// Override the number of random tries each ship instance gets before
    /// placement fails.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Ships placed so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The ship covering `(x, y)`, if any.
    pub fn placement_at(&self, x: usize, y: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.contains(x, y))
    }

    /// Marker at column `x`, row `y`.
    pub fn get_tile(&self, x: usize, y: usize) -> Result<Tile, BoardError> {
        self.board.get(x, y).copied()
    }

    /// Snapshot of the whole board.
    pub fn get_board(&self) -> Grid<Tile> {
        self.board.clone()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Grid<Tile> {
        &self.board
    }

    /// Clear every cell back to water. The fleet is kept.
    pub fn reset_board(&mut self) {
        self.board.fill(Tile::Water);
        self.placements.clear();
    }

    /// Clear the board and swap in a new fleet.
    pub fn reset_with_fleet(&mut self, fleet: Fleet) -> Result<(), BoardError> {
        fleet.validate()?;
        self.reset_board();
        self.fleet = fleet;
        Ok(())
    }

    pub fn board_stats(&self) -> BoardStats {
        let empty_spaces = self.board.count(Tile::is_water);
        BoardStats {
            empty_spaces,
            occupied_spaces: self.board.area() - empty_spaces,
        }
    }

    /// Check whether `placement` could be written to the board as it stands.
    pub fn can_place(&self, placement: &Placement) -> Result<(), BoardError> {
        if !placement.fits(self.rows(), self.cols()) {
            return Err(BoardError::ShipOutOfBounds);
        }
        for (x, y) in placement.cells() {
            if !self.board.get(x, y)?.is_water() {
                return Err(BoardError::ShipOverlaps);
            }
        }
        for (x, y) in placement.cells() {
            for (nx, ny) in self.board.neighbors(x, y) {
                if !self.board.get(nx, ny)?.is_water() {
                    return Err(BoardError::ShipTouches);
                }
            }
        }
        Ok(())
    }

    /// Place one instance of ship `id` with its anchor at `(x, y)`.
    pub fn place_ship(
        &mut self,
        id: ShipId,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let length = self
            .fleet
            .length_of(id)
            .ok_or(BoardError::UnknownShip { id })?;
        if self.unplaced(id) == 0 {
            return Err(BoardError::ShipAlreadyPlaced { id });
        }
        let placement = Placement::new(id, length, x, y, orientation);
        self.can_place(&placement)?;
        self.write(placement)
    }

    /// Randomly place every ship instance not yet on the board.
    ///
    /// Each instance gets `max_attempts` tries. On failure the ships placed
    /// so far stay on the board; call [`BoardSetup::reset_board`] before
    /// trying again.
    pub fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.check_feasible()?;
        let entries: Vec<_> = self.fleet.entries().to_vec();
        for entry in entries {
            for _ in 0..self.unplaced(entry.id) {
                let placement = self.random_placement(&mut *rng, entry.id, entry.length)?;
                self.write(placement)?;
            }
        }
        Ok(())
    }

    /// Like [`BoardSetup::place_ships`], but on placement failure reset the
    /// board and start over, up to `restarts` more times.
    pub fn place_ships_with_restarts<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        restarts: usize,
    ) -> Result<(), BoardError> {
        let mut round = 0;
        loop {
            match self.place_ships(&mut *rng) {
                Err(BoardError::PlacementFailure { id, attempts })
                    if attempts > 0 && round < restarts =>
                {
                    round += 1;
                    warn!(
                        "ship {} did not fit after {} attempts; restarting layout ({}/{})",
                        id, attempts, round, restarts
                    );
                    self.reset_board();
                }
                other => return other,
            }
        }
    }

    /// Draw random anchors until one passes [`BoardSetup::can_place`].
    fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: ShipId,
        length: usize,
    ) -> Result<Placement, BoardError> {
        let (rows, cols) = (self.rows(), self.cols());
        let fits_h = length <= cols;
        let fits_v = length <= rows;
        for attempt in 1..=self.max_attempts {
            let orientation = match (fits_h, fits_v) {
                (true, true) => {
                    if rng.random() {
                        Orientation::Horizontal
                    } else {
                        Orientation::Vertical
                    }
                }
                (true, false) => Orientation::Horizontal,
                (false, true) => Orientation::Vertical,
                (false, false) => break,
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (cols - length, rows - 1),
                Orientation::Vertical => (cols - 1, rows - length),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let placement = Placement::new(id, length, x, y, orientation);
            if self.can_place(&placement).is_ok() {
                debug!(
                    "placed ship {} at ({}, {}) {:?} after {} attempts",
                    id, x, y, orientation, attempt
                );
                return Ok(placement);
            }
        }
        Err(BoardError::PlacementFailure {
            id,
            attempts: self.max_attempts,
        })
    }

    /// Fail fast on fleets that can never fit.
    fn check_feasible(&self) -> Result<(), BoardError> {
        let longest = self.rows().max(self.cols());
        if let Some(e) = self
            .fleet
            .iter()
            .find(|e| e.count > 0 && e.length > longest)
        {
            return Err(BoardError::PlacementFailure { id: e.id, attempts: 0 });
        }
        if self.fleet.total_cells() > self.board.area() {
            let id = self.fleet.iter().find(|e| e.count > 0).map_or(0, |e| e.id);
            return Err(BoardError::PlacementFailure { id, attempts: 0 });
        }
        Ok(())
    }

    fn unplaced(&self, id: ShipId) -> usize {
        let placed = self.placements.iter().filter(|p| p.id == id).count();
        self.fleet.count_of(id).saturating_sub(placed)
    }

    fn write(&mut self, placement: Placement) -> Result<(), BoardError> {
        for (x, y) in placement.cells() {
            self.board.set(x, y, Tile::Ship(placement.id))?;
        }
        self.placements.push(placement);
        Ok(())
    }
}

impl TryFrom<GameConfig> for BoardSetup {
    type Error = BoardError;

    fn try_from(config: GameConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(BoardSetup {
            board: Grid::new(config.rows, config.cols, Tile::Water),
            max_attempts: PLACEMENT_ATTEMPTS_PER_CELL * config.rows * config.cols,
            fleet: config.fleet,
            placements: Vec::new(),
        })
    }
}

impl fmt::Debug for BoardSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BoardSetup {{ fleet: {}, placements: {}, max_attempts: {} }}",
            self.fleet,
            self.placements.len(),
            self.max_attempts
        )?;
        fmt::Display::fmt(&self.board, f)
    }
}
