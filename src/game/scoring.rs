//! Word scoring with letter and word bonuses

use super::board::{Board, BoardSlot, Bonus};

/// How a score was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Sum of tile values after letter bonuses
    pub raw: u32,
    /// Product of all word bonuses covered
    pub word_multiplier: u32,
    pub total: u32,
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self {
            raw: 0,
            word_multiplier: 1,
            total: 0,
        }
    }
}

/// Score a set of slots. Empty slots contribute nothing.
pub fn score<'a, I>(slots: I) -> ScoreBreakdown
where
    I: IntoIterator<Item = &'a BoardSlot>,
{
    let mut raw = 0;
    let mut word_multiplier = 1;

    for slot in slots {
        let Some(tile) = slot.occupant() else {
            continue;
        };
        let mut value = tile.value;
        match slot.bonus {
            Bonus::DoubleLetter => value *= 2,
            Bonus::DoubleWord => word_multiplier *= 2,
            Bonus::None => {}
        }
        raw += value;
    }

    ScoreBreakdown {
        raw,
        word_multiplier,
        total: raw * word_multiplier,
    }
}

/// Live preview over every occupied slot, contiguous or not.
pub fn preview(board: &Board) -> ScoreBreakdown {
    score(board.slots())
}

/// Score only the given slots, e.g. those of an extracted word.
pub fn score_slots(board: &Board, indices: &[usize]) -> ScoreBreakdown {
    score(indices.iter().filter_map(|&i| board.slot(i)))
}
