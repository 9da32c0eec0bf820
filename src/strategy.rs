//! Hunt/target attack policy over the attacker's knowledge of the enemy board.
//! Deterministic: the same sequence of reported outcomes always yields the
//! same sequence of shots.

use alloc::vec::Vec;
use core::fmt;
use log::{trace, warn};

use crate::common::{BoardError, Knowledge};
use crate::config::GameConfig;
use crate::fleet::Fleet;
use crate::grid::Grid;

/// Tracks what is known about the enemy board and picks the next shot.
#[derive(Clone)]
pub struct AttackStrategy {
    enemy_board: Grid<Knowledge>,
    remaining: Fleet,
    shots_fired: usize,
}

impl AttackStrategy {
    /// Create a strategy facing a `rows × cols` board holding `fleet`.
    pub fn new(rows: usize, cols: usize, fleet: Fleet) -> Result<Self, BoardError> {
        GameConfig::new(rows, cols, fleet).try_into()
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        config.clone().try_into()
    }

    pub fn rows(&self) -> usize {
        self.enemy_board.rows()
    }

    pub fn cols(&self) -> usize {
        self.enemy_board.cols()
    }

    /// Number of attacks registered so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Choose the next `(x, y)` to attack.
    ///
    /// In priority order:
    /// 1. an unknown neighbour (left, right, up, down) of a hit, scanning hits
    ///    row-major;
    /// 2. the first unknown cell in row-major order with `x + y` even;
    /// 3. the first unknown cell in row-major order.
    ///
    /// Fails with [`BoardError::ExhaustedBoard`] when nothing is unknown.
    pub fn get_next_attack(&self) -> Result<(usize, usize), BoardError> {
        if let Some(target) = self.target_adjacent_hit() {
            trace!("target mode: {:?}", target);
            return Ok(target);
        }
        let mut fallback = None;
        for ((x, y), cell) in self.enemy_board.iter() {
            if !cell.is_unknown() {
                continue;
            }
            if (x + y) % 2 == 0 {
                trace!("checkerboard sweep: {:?}", (x, y));
                return Ok((x, y));
            }
            fallback.get_or_insert((x, y));
        }
        match fallback {
            Some(coord) => {
                trace!("fallback sweep: {:?}", coord);
                Ok(coord)
            }
            None => Err(BoardError::ExhaustedBoard),
        }
    }

    fn target_adjacent_hit(&self) -> Option<(usize, usize)> {
        self.enemy_board
            .iter()
            .filter(|(_, cell)| **cell == Knowledge::Hit)
            .find_map(|((x, y), _)| {
                self.enemy_board.neighbors(x, y).find(|&(nx, ny)| {
                    self.enemy_board
                        .get(nx, ny)
                        .map_or(false, Knowledge::is_unknown)
                })
            })
    }

    /// Record the outcome of an attack at `(x, y)`.
    ///
    /// When `is_sunk` is set, unknown neighbours of `(x, y)` become
    /// [`Knowledge::Excluded`] and the first fleet entry with a positive
    /// count is decremented. Only the reported cell is used, the rest of the
    /// sunk ship is not traced.
    pub fn register_attack(
        &mut self,
        x: usize,
        y: usize,
        is_hit: bool,
        is_sunk: bool,
    ) -> Result<(), BoardError> {
        let marker = if is_hit { Knowledge::Hit } else { Knowledge::Miss };
        let previous = self.enemy_board.set(x, y, marker)?;
        if !previous.is_unknown() {
            warn!("overwriting {:?} at ({}, {}) with {:?}", previous, x, y, marker);
        }
        self.shots_fired += 1;

        if is_sunk {
            let neighbors: Vec<_> = self.enemy_board.neighbors(x, y).collect();
            for (nx, ny) in neighbors {
                if self.enemy_board.get(nx, ny)?.is_unknown() {
                    self.enemy_board.set(nx, ny, Knowledge::Excluded)?;
                }
            }
            match self.remaining.decrement_first() {
                Some(id) => trace!("sunk at ({}, {}), counting it as ship {}", x, y, id),
                None => warn!("sunk reported at ({}, {}) but no ships remain", x, y),
            }
        }
        Ok(())
    }

    /// Snapshot of the knowledge grid.
    pub fn get_enemy_board(&self) -> Grid<Knowledge> {
        self.enemy_board.clone()
    }

    /// Read-only view of the knowledge grid.
    pub fn enemy_board(&self) -> &Grid<Knowledge> {
        &self.enemy_board
    }

    /// Ships believed to be still afloat.
    pub fn get_remaining_ships(&self) -> Fleet {
        self.remaining.remaining()
    }

    pub fn all_ships_sunk(&self) -> bool {
        self.remaining.all_sunk()
    }

    /// Coordinates of every recorded hit, row-major.
    pub fn hit_cells(&self) -> Vec<(usize, usize)> {
        self.enemy_board
            .iter()
            .filter(|(_, cell)| **cell == Knowledge::Hit)
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl TryFrom<GameConfig> for AttackStrategy {
    type Error = BoardError;

    fn try_from(config: GameConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(AttackStrategy {
            enemy_board: Grid::new(config.rows, config.cols, Knowledge::Unknown),
            remaining: config.fleet,
            shots_fired: 0,
        })
    }
}

impl fmt::Debug for AttackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "AttackStrategy {{ remaining: {}, shots_fired: {} }}",
            self.remaining, self.shots_fired
        )?;
        fmt::Display::fmt(&self.enemy_board, f)
    }
}
