//! Submission checks for the word on the board
//!
//! Checks run in a fixed order and the first failure wins:
//! - Something is placed
//! - The tiles form one unbroken run
//! - Length >= 2
//! - Dictionary presence

use super::dictionary::Dictionary;
use super::word::ExtractedWord;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 2;

/// Result of validating a play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// No tiles on the board
    NothingPlaced,
    /// Tiles appear again after an empty slot
    Discontinuous,
    /// Word is shorter than two letters
    TooShort { length: usize },
    /// Word not found in dictionary
    NotInDictionary { word: String },
}

impl ValidationResult {
    /// Returns true if the word is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns a user-friendly message
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid word!".to_string(),
            ValidationResult::NothingPlaced => "Please place tiles on the board.".to_string(),
            ValidationResult::Discontinuous => {
                "Error: Word must be continuous (no gaps).".to_string()
            }
            ValidationResult::TooShort { .. } => {
                format!("Error: Word must be at least {} letters.", MIN_WORD_LENGTH)
            }
            ValidationResult::NotInDictionary { word } => {
                format!("Sorry, '{}' is not in the dictionary.", word)
            }
        }
    }
}

/// Validate an extracted word against the dictionary
pub fn validate_play(extracted: &ExtractedWord, dictionary: &Dictionary) -> ValidationResult {
    if extracted.is_empty() {
        return ValidationResult::NothingPlaced;
    }

    if extracted.has_gap {
        return ValidationResult::Discontinuous;
    }

    if extracted.len() < MIN_WORD_LENGTH {
        return ValidationResult::TooShort {
            length: extracted.len(),
        };
    }

    if !dictionary.is_valid(&extracted.word) {
        return ValidationResult::NotInDictionary {
            word: extracted.word.clone(),
        };
    }

    ValidationResult::Valid
}
