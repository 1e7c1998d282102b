//! A single-player game: deal, place, submit, reset
//!
//! The session owns the bag, rack, board and cumulative score. Each public
//! operation either completes or leaves all of them as they were; only the
//! feedback message changes on a rejection.

use super::bag::TileBag;
use super::board::Board;
use super::dictionary::Dictionary;
use super::placement::{self, Location, Placement, PlacementError};
use super::rack::{Rack, Tile, TileId};
use super::scoring::{self, ScoreBreakdown};
use super::tiles::Letter;
use super::validation::{validate_play, ValidationResult};
use super::word::{self, ExtractedWord};
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// How a feedback message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Feedback from the last operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Result of topping up the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealOutcome {
    /// Tiles added to the rack
    pub dealt: usize,
    /// The bag ran out before the rack was full
    pub bag_exhausted: bool,
}

/// Result of submitting the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { word: String, points: u32 },
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

pub struct GameSession<R = StdRng> {
    bag: TileBag,
    rack: Rack,
    board: Board,
    dictionary: Dictionary,
    score: u32,
    message: Message,
    /// Next tile id; never reused, even across resets
    next_id: u64,
    rng: R,
}

impl GameSession<StdRng> {
    /// New session seeded from the OS. The rack starts empty; call
    /// [`GameSession::deal`] to fill it.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// New session with a fixed seed.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            bag: TileBag::new(config.catalog),
            rack: Rack::with_capacity(config.rack_capacity),
            board: Board::new(&config.layout),
            dictionary: Dictionary::empty(),
            score: 0,
            message: Message::default(),
            next_id: 0,
            rng,
        }
    }

    /// Install a loaded word list. Until this is called every word is
    /// rejected as unknown.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        info!(words = dictionary.len(), "dictionary loaded");
        self.dictionary = dictionary;
    }

    /// Top the rack up to capacity from the bag. The board is left alone.
    pub fn deal(&mut self) -> DealOutcome {
        let need = self.rack.needed();
        let mut outcome = DealOutcome::default();

        for _ in 0..need {
            let Some(letter) = self.bag.draw(&mut self.rng) else {
                outcome.bag_exhausted = true;
                self.message = Message::info("No more tiles left in the bag!");
                break;
            };
            let tile = self.mint_tile(letter);
            if self.rack.add(tile).is_err() {
                break;
            }
            outcome.dealt += 1;
        }

        debug!(
            dealt = outcome.dealt,
            bag_exhausted = outcome.bag_exhausted,
            remaining = self.bag.remaining_total(),
            "dealt tiles"
        );
        outcome
    }

    /// Move a tile to the rack or a board slot. On success the message
    /// becomes a live preview of the board.
    pub fn place(&mut self, id: TileId, to: Location) -> Result<Placement, PlacementError> {
        match placement::place(&mut self.rack, &mut self.board, id, to) {
            Ok(placed) => {
                debug!(tile = %id, ?placed, "placed tile");
                let preview = self.preview();
                self.message = Message::info(format!(
                    "Word Played: {} ({} points)",
                    word::all_letters(&self.board),
                    preview.total
                ));
                Ok(placed)
            }
            Err(err) => {
                debug!(tile = %id, ?to, %err, "placement rejected");
                self.message = Message::error(err.to_string());
                Err(err)
            }
        }
    }

    /// Validate the board word and bank its score. Accepted tiles stay on
    /// the board.
    pub fn submit(&mut self) -> SubmitOutcome {
        let extracted = self.current_word();
        let result = validate_play(&extracted, &self.dictionary);

        if !result.is_valid() {
            debug!(word = %extracted.word, ?result, "play rejected");
            self.message = match result {
                ValidationResult::NothingPlaced => Message::info(result.message()),
                _ => Message::error(result.message()),
            };
            return SubmitOutcome::Rejected(result);
        }

        let points = scoring::score_slots(&self.board, &extracted.slots).total;
        self.score += points;
        info!(word = %extracted.word, points, total = self.score, "word accepted");

        self.message = Message::success(format!(
            "Success! '{}' is a valid word. Points: {}",
            extracted.word, points
        ));
        SubmitOutcome::Accepted {
            word: extracted.word,
            points,
        }
    }

    /// Start over: empty rack and board, full bag, zero score, fresh rack.
    pub fn reset(&mut self) -> DealOutcome {
        self.rack.clear();
        self.board.clear();
        self.bag.reset();
        self.score = 0;
        let outcome = self.deal();
        self.message = Message::default();
        info!("game reset");
        outcome
    }

    fn mint_tile(&mut self, letter: Letter) -> Tile {
        let id = TileId(self.next_id);
        self.next_id += 1;
        Tile {
            id,
            letter,
            value: self.bag.catalog().value(letter),
        }
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_tiles(&self) -> u32 {
        self.bag.remaining_total()
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Where a tile currently sits.
    pub fn locate(&self, id: TileId) -> Option<Location> {
        placement::locate(&self.rack, &self.board, id)
    }

    /// The word the board would submit right now.
    pub fn current_word(&self) -> ExtractedWord {
        word::extract(&self.board)
    }

    /// Score of every tile on the board, contiguous or not.
    pub fn preview(&self) -> ScoreBreakdown {
        scoring::preview(&self.board)
    }
}
