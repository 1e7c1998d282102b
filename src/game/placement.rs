//! Moving tiles between the rack and board slots
//!
//! A tile always lives in exactly one place: on the rack or on a single
//! board slot. Every move either completes fully or leaves both
//! containers untouched.

use super::board::Board;
use super::rack::{Rack, TileId};
use thiserror::Error;

/// Where a tile currently is, or where it should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Rack,
    Slot(usize),
}

/// A successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Moved { from: Location, to: Location },
    /// Dropped back where it already was
    Unchanged(Location),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("{0} is not on the rack or the board")]
    UnknownTile(TileId),
    #[error("slot {slot} is already taken by {occupant}")]
    SlotOccupied { slot: usize, occupant: TileId },
    #[error("there is no slot {0}")]
    NoSuchSlot(usize),
    #[error("the rack is full")]
    RackFull,
}

/// Find which container holds a tile.
pub fn locate(rack: &Rack, board: &Board, id: TileId) -> Option<Location> {
    if rack.contains(id) {
        return Some(Location::Rack);
    }
    board.find(id).map(Location::Slot)
}

/// Move a tile to `to`.
pub fn place(
    rack: &mut Rack,
    board: &mut Board,
    id: TileId,
    to: Location,
) -> Result<Placement, PlacementError> {
    let from = locate(rack, board, id).ok_or(PlacementError::UnknownTile(id))?;

    if from == to {
        return Ok(Placement::Unchanged(from));
    }

    // Every check happens before anything is detached.
    match to {
        Location::Slot(index) => {
            let slot = board.slot(index).ok_or(PlacementError::NoSuchSlot(index))?;
            if let Some(occupant) = slot.occupant() {
                return Err(PlacementError::SlotOccupied {
                    slot: index,
                    occupant: occupant.id,
                });
            }
        }
        Location::Rack => {
            if rack.is_full() {
                return Err(PlacementError::RackFull);
            }
        }
    }

    let tile = match from {
        Location::Rack => rack.remove(id).ok(),
        Location::Slot(index) => board.take(index),
    }
    .ok_or(PlacementError::UnknownTile(id))?;

    match to {
        Location::Slot(index) => {
            if board.put(index, tile).is_err() {
                return Err(PlacementError::NoSuchSlot(index));
            }
        }
        Location::Rack => {
            if rack.add(tile).is_err() {
                return Err(PlacementError::RackFull);
            }
        }
    }

    Ok(Placement::Moved { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rack::Tile;
    use crate::game::tiles::Letter;

    fn setup(count: u64) -> (Rack, Board) {
        let mut rack = Rack::default();
        for i in 0..count {
            rack.add(Tile {
                id: TileId(i),
                letter: Letter::new((b'A' + i as u8) as char).unwrap(),
                value: 1,
            })
            .unwrap();
        }
        (rack, Board::default())
    }

    fn assert_exclusive(rack: &Rack, board: &Board) {
        let mut seen: Vec<TileId> = rack.tiles().iter().map(|t| t.id).collect();
        seen.extend(board.slots().iter().filter_map(|s| s.occupant().map(|t| t.id)));
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total, "a tile is held twice");
    }

    #[test]
    fn test_rack_to_slot() {
        let (mut rack, mut board) = setup(3);
        let result = place(&mut rack, &mut board, TileId(0), Location::Slot(2));
        assert_eq!(
            result,
            Ok(Placement::Moved {
                from: Location::Rack,
                to: Location::Slot(2)
            })
        );
        assert_eq!(rack.len(), 2);
        assert_eq!(board.find(TileId(0)), Some(2));
    }

    #[test]
    fn test_occupied_slot_rejected() {
        let (mut rack, mut board) = setup(3);
        place(&mut rack, &mut board, TileId(0), Location::Slot(2)).unwrap();

        let result = place(&mut rack, &mut board, TileId(1), Location::Slot(2));
        assert_eq!(
            result,
            Err(PlacementError::SlotOccupied {
                slot: 2,
                occupant: TileId(0)
            })
        );
        assert!(rack.contains(TileId(1)));
        assert_eq!(board.find(TileId(0)), Some(2));
    }

    #[test]
    fn test_drop_in_place_is_noop() {
        let (mut rack, mut board) = setup(1);
        place(&mut rack, &mut board, TileId(0), Location::Slot(4)).unwrap();
        let result = place(&mut rack, &mut board, TileId(0), Location::Slot(4));
        assert_eq!(result, Ok(Placement::Unchanged(Location::Slot(4))));
        assert_eq!(board.find(TileId(0)), Some(4));

        let (mut rack, mut board) = setup(1);
        let result = place(&mut rack, &mut board, TileId(0), Location::Rack);
        assert_eq!(result, Ok(Placement::Unchanged(Location::Rack)));
    }

    #[test]
    fn test_slot_to_slot_and_back_to_rack() {
        let (mut rack, mut board) = setup(2);
        place(&mut rack, &mut board, TileId(1), Location::Slot(0)).unwrap();
        place(&mut rack, &mut board, TileId(1), Location::Slot(6)).unwrap();
        assert!(!board.slot(0).unwrap().is_occupied());
        assert_eq!(board.find(TileId(1)), Some(6));

        place(&mut rack, &mut board, TileId(1), Location::Rack).unwrap();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(rack.len(), 2);
    }

    #[test]
    fn test_unknown_tile() {
        let (mut rack, mut board) = setup(1);
        assert_eq!(
            place(&mut rack, &mut board, TileId(42), Location::Slot(0)),
            Err(PlacementError::UnknownTile(TileId(42)))
        );
    }

    #[test]
    fn test_missing_slot() {
        let (mut rack, mut board) = setup(1);
        assert_eq!(
            place(&mut rack, &mut board, TileId(0), Location::Slot(12)),
            Err(PlacementError::NoSuchSlot(12))
        );
        assert!(rack.contains(TileId(0)));
    }

    #[test]
    fn test_full_rack_keeps_board_tile() {
        let (mut rack, mut board) = setup(7);
        place(&mut rack, &mut board, TileId(0), Location::Slot(0)).unwrap();
        rack.add(Tile {
            id: TileId(100),
            letter: Letter::new('Q').unwrap(),
            value: 10,
        })
        .unwrap();

        assert_eq!(
            place(&mut rack, &mut board, TileId(0), Location::Rack),
            Err(PlacementError::RackFull)
        );
        assert_eq!(board.find(TileId(0)), Some(0));
        assert_eq!(rack.len(), 7);
    }

    #[test]
    fn test_no_double_occupancy_after_shuffling() {
        let (mut rack, mut board) = setup(7);
        let moves = [
            (0, Location::Slot(0)),
            (1, Location::Slot(0)),
            (1, Location::Slot(1)),
            (2, Location::Slot(1)),
            (0, Location::Slot(1)),
            (0, Location::Slot(3)),
            (3, Location::Slot(0)),
            (1, Location::Rack),
            (4, Location::Slot(1)),
            (0, Location::Slot(0)),
        ];
        for (id, to) in moves {
            let _ = place(&mut rack, &mut board, TileId(id), to);
            assert_exclusive(&rack, &board);
            assert_eq!(rack.len() + board.occupied_count(), 7);
        }
    }
}
