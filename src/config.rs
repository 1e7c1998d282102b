//! Game rules and command-line configuration

use crate::game::board::{Bonus, DEFAULT_LAYOUT};
use crate::game::dictionary::DictionarySource;
use crate::game::rack::RACK_CAPACITY;
use crate::game::tiles::TileCatalog;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Name of the word list looked for in the data directory.
pub const WORDS_FILE: &str = "words.txt";

/// Name of the log file written to the data directory.
pub const LOG_FILE: &str = "wordslot.log";

/// Rules for one game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub catalog: TileCatalog,
    /// One entry per board slot
    pub layout: Vec<Bonus>,
    pub rack_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: TileCatalog::standard(),
            layout: DEFAULT_LAYOUT.to_vec(),
            rack_capacity: RACK_CAPACITY,
        }
    }
}

/// wordslot - build a word from your rack on a row of bonus slots
#[derive(Parser, Debug, Default)]
#[command(name = "wordslot")]
#[command(about = "Single-player word tile game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Newline-delimited word list (defaults to words.txt in the data
    /// directory, then the built-in list)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed for a repeatable tile order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Pick the word list: explicit path, then the data directory, then
    /// the embedded list.
    pub fn dictionary_source(&self) -> DictionarySource {
        if let Some(path) = &self.words {
            return DictionarySource::File(path.clone());
        }
        match data_dir().map(|dir| dir.join(WORDS_FILE)) {
            Some(path) if path.is_file() => DictionarySource::File(path),
            _ => DictionarySource::Embedded,
        }
    }

    /// Log file location, if one can be determined.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join(LOG_FILE)))
    }
}

/// OS-standard data directory:
/// - Linux: `$XDG_DATA_HOME/wordslot/` or `~/.local/share/wordslot/`
/// - macOS: `~/Library/Application Support/wordslot/`
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordslot").map(|dirs| dirs.data_dir().to_path_buf())
}
