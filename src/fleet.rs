//! Ship catalog: which ship classes exist and how many of each.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, ShipId};

/// One ship class in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetEntry {
    pub id: ShipId,
    pub length: usize,
    pub count: usize,
}

/// Ordered mapping of ship id to count.
///
/// Entries keep the order they were first inserted in. That order decides
/// which ship is placed first and which entry a sunk report decrements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` ships whose length equals `id`.
    pub fn with_ship(self, id: ShipId, count: usize) -> Self {
        self.with_ship_length(id, id as usize, count)
    }

    /// Add `count` ships of class `id` with an explicit `length`.
    pub fn with_ship_length(mut self, id: ShipId, length: usize, count: usize) -> Self {
        self.add(id, length, count);
        self
    }

    /// Add ships in place. An id already present keeps its length and
    /// position and has `count` added to it.
    pub fn add(&mut self, id: ShipId, length: usize, count: usize) {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.count = entry.count.saturating_add(count),
            None => self.entries.push(FleetEntry { id, length, count }),
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FleetEntry> {
        self.entries.iter()
    }

    /// Count for `id`, zero if absent.
    pub fn count_of(&self, id: ShipId) -> usize {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map_or(0, |e| e.count)
    }

    pub fn length_of(&self, id: ShipId) -> Option<usize> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.length)
    }

    /// Number of ship instances.
    pub fn total_ships(&self) -> usize {
        self.entries
            .iter()
            .fold(0usize, |acc, e| acc.saturating_add(e.count))
    }

    /// Number of cells the whole fleet covers.
    pub fn total_cells(&self) -> usize {
        self.entries
            .iter()
            .fold(0usize, |acc, e| acc.saturating_add(e.length.saturating_mul(e.count)))
    }

    /// Returns `true` when every count is zero.
    pub fn all_sunk(&self) -> bool {
        self.entries.iter().all(|e| e.count == 0)
    }

    /// Sub-fleet of entries with a positive count.
    pub fn remaining(&self) -> Fleet {
        Fleet {
            entries: self.entries.iter().filter(|e| e.count > 0).copied().collect(),
        }
    }

    /// Decrement the first entry with a positive count and return its id.
    pub fn decrement_first(&mut self) -> Option<ShipId> {
        let entry = self.entries.iter_mut().find(|e| e.count > 0)?;
        entry.count -= 1;
        Some(entry.id)
    }

    /// Reject zero ids and zero lengths.
    pub fn validate(&self) -> Result<(), BoardError> {
        match self.entries.iter().find(|e| e.id == 0 || e.length == 0) {
            Some(e) => Err(BoardError::InvalidShip { id: e.id }),
            None => Ok(()),
        }
    }
}

impl FromIterator<(ShipId, usize)> for Fleet {
    /// Build from `(id, count)` pairs using the id-equals-length convention.
    fn from_iter<I: IntoIterator<Item = (ShipId, usize)>>(iter: I) -> Self {
        let mut fleet = Fleet::new();
        for (id, count) in iter {
            fleet.add(id, id as usize, count);
        }
        fleet
    }
}

impl FromStr for Fleet {
    type Err = BoardError;

    /// Parse `id:count[:length]` pairs separated by commas, e.g. `4:1,3:2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fleet = Fleet::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let mut fields = part.split(':').map(str::trim);
            let id: ShipId = parse_field(fields.next())?;
            let count: usize = parse_field(fields.next())?;
            let length = match fields.next() {
                Some(f) => parse_field(Some(f))?,
                None => id as usize,
            };
            if fields.next().is_some() {
                return Err(BoardError::InvalidFleetSpec);
            }
            fleet.add(id, length, count);
        }
        if fleet.entries.is_empty() {
            return Err(BoardError::InvalidFleetSpec);
        }
        fleet.validate()?;
        Ok(fleet)
    }
}

fn parse_field<T: FromStr>(field: Option<&str>) -> Result<T, BoardError> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or(BoardError::InvalidFleetSpec)
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", e.id, e.count)?;
            if e.length != e.id as usize {
                write!(f, ":{}", e.length)?;
            }
        }
        Ok(())
    }
}
