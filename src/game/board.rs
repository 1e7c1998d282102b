//! The board: a fixed row of slots, some carrying bonuses

use super::rack::{Tile, TileId};

/// Scoring modifier printed on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bonus {
    #[default]
    None,
    /// Doubles the value of the tile on this slot
    DoubleLetter,
    /// Doubles the whole word; stacks with other word bonuses
    DoubleWord,
}

impl Bonus {
    pub fn short_label(&self) -> &'static str {
        match self {
            Bonus::None => "",
            Bonus::DoubleLetter => "2L",
            Bonus::DoubleWord => "2W",
        }
    }
}

/// Default seven-slot layout.
pub const DEFAULT_LAYOUT: [Bonus; 7] = [
    Bonus::None,
    Bonus::DoubleLetter,
    Bonus::DoubleWord,
    Bonus::None,
    Bonus::None,
    Bonus::DoubleWord,
    Bonus::DoubleLetter,
];

/// One board position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSlot {
    pub index: usize,
    pub bonus: Bonus,
    occupant: Option<Tile>,
}

impl BoardSlot {
    pub fn occupant(&self) -> Option<&Tile> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Ordered, fixed-length slot sequence.
#[derive(Debug, Clone)]
pub struct Board {
    slots: Vec<BoardSlot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&DEFAULT_LAYOUT)
    }
}

impl Board {
    /// Build an empty board with one slot per layout entry.
    pub fn new(layout: &[Bonus]) -> Self {
        let slots = layout
            .iter()
            .enumerate()
            .map(|(index, &bonus)| BoardSlot {
                index,
                bonus,
                occupant: None,
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[BoardSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&BoardSlot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the slot holding a tile, if it is on the board.
    pub fn find(&self, id: TileId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.occupant.is_some_and(|t| t.id == id))
    }

    /// Put a tile on an empty slot. Returns the tile back if the slot is
    /// taken or does not exist.
    pub(crate) fn put(&mut self, index: usize, tile: Tile) -> Result<(), Tile> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.occupant.is_none() => {
                slot.occupant = Some(tile);
                Ok(())
            }
            _ => Err(tile),
        }
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Tile> {
        self.slots.get_mut(index).and_then(|s| s.occupant.take())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Remove every tile from the board.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.occupant = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tiles::Letter;

    fn tile(id: u64, c: char) -> Tile {
        Tile {
            id: TileId(id),
            letter: Letter::new(c).unwrap(),
            value: 1,
        }
    }

    #[test]
    fn test_default_layout() {
        let board = Board::default();
        assert_eq!(board.len(), 7);
        assert_eq!(board.slot(1).unwrap().bonus, Bonus::DoubleLetter);
        assert_eq!(board.slot(2).unwrap().bonus, Bonus::DoubleWord);
        assert_eq!(board.slot(5).unwrap().bonus, Bonus::DoubleWord);
        assert!(board.slots().iter().all(|s| !s.is_occupied()));
    }

    #[test]
    fn test_put_rejects_occupied_slot() {
        let mut board = Board::default();
        assert!(board.put(3, tile(1, 'A')).is_ok());
        let bounced = board.put(3, tile(2, 'B')).unwrap_err();
        assert_eq!(bounced.id, TileId(2));
        assert_eq!(board.slot(3).unwrap().occupant().unwrap().id, TileId(1));
    }

    #[test]
    fn test_put_rejects_missing_slot() {
        let mut board = Board::default();
        assert!(board.put(7, tile(1, 'A')).is_err());
    }

    #[test]
    fn test_find_and_take() {
        let mut board = Board::default();
        board.put(4, tile(9, 'Z')).unwrap();
        assert_eq!(board.find(TileId(9)), Some(4));
        assert_eq!(board.take(4).unwrap().id, TileId(9));
        assert_eq!(board.find(TileId(9)), None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::default();
        board.put(0, tile(1, 'A')).unwrap();
        board.put(6, tile(2, 'B')).unwrap();
        board.clear();
        assert_eq!(board.occupied_count(), 0);
    }
}
