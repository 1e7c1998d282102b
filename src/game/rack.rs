//! The player's rack of held tiles

use super::tiles::Letter;
use std::fmt;
use thiserror::Error;

/// Default number of tiles a rack holds.
pub const RACK_CAPACITY: usize = 7;

/// Unique identifier for a drawn tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// A drawn tile. Letter and value are fixed at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: Letter,
    pub value: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RackError {
    #[error("rack is full ({capacity} tiles)")]
    CapacityExceeded { capacity: usize },
    #[error("{0} is not on the rack")]
    NotFound(TileId),
}

/// Held tiles, in the order they were added.
#[derive(Debug, Clone)]
pub struct Rack {
    tiles: Vec<Tile>,
    capacity: usize,
}

impl Default for Rack {
    fn default() -> Self {
        Self::with_capacity(RACK_CAPACITY)
    }
}

impl Rack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, tile: Tile) -> Result<(), RackError> {
        if self.is_full() {
            return Err(RackError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.tiles.push(tile);
        Ok(())
    }

    pub fn remove(&mut self, id: TileId) -> Result<Tile, RackError> {
        let pos = self
            .tiles
            .iter()
            .position(|t| t.id == id)
            .ok_or(RackError::NotFound(id))?;
        Ok(self.tiles.remove(pos))
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id == id)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.capacity
    }

    /// Free spaces left on the rack.
    pub fn needed(&self) -> usize {
        self.capacity.saturating_sub(self.tiles.len())
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: u64) -> Tile {
        Tile {
            id: TileId(id),
            letter: Letter::new('A').unwrap(),
            value: 1,
        }
    }

    #[test]
    fn test_add_until_full() {
        let mut rack = Rack::default();
        for i in 0..7 {
            rack.add(tile(i)).unwrap();
        }
        assert!(rack.is_full());
        assert_eq!(rack.needed(), 0);
        assert_eq!(
            rack.add(tile(7)),
            Err(RackError::CapacityExceeded { capacity: 7 })
        );
        assert_eq!(rack.len(), 7);
    }

    #[test]
    fn test_remove() {
        let mut rack = Rack::default();
        rack.add(tile(1)).unwrap();
        rack.add(tile(2)).unwrap();

        let removed = rack.remove(TileId(1)).unwrap();
        assert_eq!(removed.id, TileId(1));
        assert_eq!(rack.len(), 1);
        assert!(!rack.contains(TileId(1)));
        assert_eq!(rack.remove(TileId(1)), Err(RackError::NotFound(TileId(1))));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut rack = Rack::default();
        for i in [5, 3, 9] {
            rack.add(tile(i)).unwrap();
        }
        let ids: Vec<u64> = rack.tiles().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }
}
