//! The tile bag: remaining counts per letter

use super::tiles::{Letter, TileCatalog};
use rand::Rng;

/// Remaining tile supply, derived from a catalog.
#[derive(Debug, Clone)]
pub struct TileBag {
    catalog: TileCatalog,
    /// Remaining count per definition, in catalog order
    remaining: Vec<u32>,
}

impl TileBag {
    /// Create a full bag.
    pub fn new(catalog: TileCatalog) -> Self {
        let remaining = catalog.definitions().iter().map(|d| d.copies).collect();
        Self { catalog, remaining }
    }

    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Draw one letter, chosen uniformly among letters that still have
    /// copies left. Returns `None` once the bag is exhausted, without
    /// touching any state.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Letter> {
        let available: Vec<usize> = self
            .remaining
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, _)| i)
            .collect();

        if available.is_empty() {
            return None;
        }

        let index = available[rng.random_range(0..available.len())];
        self.remaining[index] -= 1;
        Some(self.catalog.definitions()[index].letter)
    }

    /// Restore every letter to its full distribution.
    pub fn reset(&mut self) {
        for (count, def) in self.remaining.iter_mut().zip(self.catalog.definitions()) {
            *count = def.copies;
        }
    }

    /// Total tiles left in the bag.
    pub fn remaining_total(&self) -> u32 {
        self.remaining.iter().sum()
    }

    /// Tiles left for one letter.
    pub fn remaining(&self, letter: Letter) -> u32 {
        self.catalog
            .definitions()
            .iter()
            .position(|d| d.letter == letter)
            .map_or(0, |i| self.remaining[i])
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_total() == 0
    }
}
