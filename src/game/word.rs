//! Reading the played word off the board
//!
//! Only the first run of consecutive occupied slots counts as the word.
//! Tiles after a gap do not start a second word; they mark the whole
//! play as discontinuous.

use super::board::Board;

/// The word currently laid on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedWord {
    /// Letters of the first contiguous run, in slot order
    pub word: String,
    /// Slot indices making up `word`
    pub slots: Vec<usize>,
    /// An occupied slot was found after the first run ended
    pub has_gap: bool,
}

impl ExtractedWord {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tiles in the word.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Scan the board in slot order.
pub fn extract(board: &Board) -> ExtractedWord {
    let mut result = ExtractedWord::default();
    let mut started = false;
    let mut gap_seen = false;

    for slot in board.slots() {
        match slot.occupant() {
            Some(_) if gap_seen => {
                result.has_gap = true;
                break;
            }
            Some(tile) => {
                started = true;
                result.word.push(tile.letter.as_char());
                result.slots.push(slot.index);
            }
            None if started => gap_seen = true,
            None => {}
        }
    }

    result
}

/// Letters of every occupied slot in order, gaps ignored.
pub fn all_letters(board: &Board) -> String {
    board
        .slots()
        .iter()
        .filter_map(|s| s.occupant().map(|t| t.letter.as_char()))
        .collect()
}
