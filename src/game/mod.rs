//! Game logic: tile bag, rack, board, word extraction, scoring, validation
//!
//! Everything here is plain data and rules. A front-end drives it through
//! [`GameSession`] and renders what the session reports.

pub mod bag;
pub mod board;
pub mod dictionary;
pub mod placement;
pub mod rack;
pub mod scoring;
pub mod session;
pub mod tiles;
pub mod validation;
pub mod word;

pub use bag::TileBag;
pub use board::{Board, BoardSlot, Bonus};
pub use dictionary::{Dictionary, DictionaryLoader, DictionarySource};
pub use placement::{Location, Placement, PlacementError};
pub use rack::{Rack, Tile, TileId};
pub use scoring::ScoreBreakdown;
pub use session::{DealOutcome, GameSession, Message, Severity, SubmitOutcome};
pub use tiles::{Letter, TileCatalog};
pub use validation::ValidationResult;
pub use word::ExtractedWord;
