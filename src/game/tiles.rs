//! Tile catalog: per-letter point values and copy counts

use std::fmt;
use thiserror::Error;

/// Symbol printed on a blank tile.
pub const BLANK: char = '_';

/// A tile symbol: an uppercase ASCII letter or the blank marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// The blank tile.
    pub const BLANK: Letter = Letter(BLANK);

    /// Build a letter, accepting either case. Returns `None` for anything
    /// that is not A-Z or the blank marker.
    pub fn new(c: char) -> Option<Self> {
        if c == BLANK {
            return Some(Letter::BLANK);
        }
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == BLANK
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static metadata for one tile symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterDefinition {
    pub letter: Letter,
    pub value: u32,
    pub copies: u32,
}

/// Errors raised while building a custom catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("letter {0} is defined more than once")]
    DuplicateLetter(Letter),
    #[error("letter {0} must have at least one copy")]
    NoCopies(Letter),
    #[error("catalog has no letters")]
    Empty,
}

/// Standard English distribution: (symbol, points, copies). 100 tiles.
const STANDARD: [(char, u32, u32); 27] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (BLANK, 0, 2),
];

/// Immutable set of letter definitions, one per symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCatalog {
    definitions: Vec<LetterDefinition>,
}

impl TileCatalog {
    /// Build a catalog, rejecting duplicate symbols and zero-copy entries.
    pub fn new(definitions: Vec<LetterDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, def) in definitions.iter().enumerate() {
            if def.copies == 0 {
                return Err(CatalogError::NoCopies(def.letter));
            }
            if definitions[..i].iter().any(|d| d.letter == def.letter) {
                return Err(CatalogError::DuplicateLetter(def.letter));
            }
        }
        Ok(Self { definitions })
    }

    /// The standard 100-tile set.
    pub fn standard() -> Self {
        let definitions = STANDARD
            .iter()
            .filter_map(|&(c, value, copies)| {
                Letter::new(c).map(|letter| LetterDefinition {
                    letter,
                    value,
                    copies,
                })
            })
            .collect();
        Self { definitions }
    }

    pub fn definitions(&self) -> &[LetterDefinition] {
        &self.definitions
    }

    pub fn definition(&self, letter: Letter) -> Option<&LetterDefinition> {
        self.definitions.iter().find(|d| d.letter == letter)
    }

    /// Point value of a letter; unknown letters score nothing.
    pub fn value(&self, letter: Letter) -> u32 {
        self.definition(letter).map_or(0, |d| d.value)
    }

    /// Size of a full bag.
    pub fn total_tiles(&self) -> u32 {
        self.definitions.iter().map(|d| d.copies).sum()
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
