//! Dictionary module for word validation
//!
//! Word lists are newline-delimited. Entries are trimmed and uppercased on
//! load, so lookups are a plain hash set probe on the uppercased word.
//! A small list is embedded at build time for play without a word file.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use thiserror::Error;

/// Embedded fallback word list, one word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| Dictionary::parse(WORDS_DATA));

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary loader stopped before delivering a word list")]
    LoaderGone,
}

/// A set of valid words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// An empty dictionary. Every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a newline-delimited word list.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a word list from disk.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// The built-in word list.
    pub fn embedded() -> Self {
        EMBEDDED.clone()
    }

    /// Check if a word is in the dictionary.
    /// Case-insensitive: input is converted to uppercase before lookup.
    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Embedded,
    File(PathBuf),
}

impl DictionarySource {
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        match self {
            DictionarySource::Embedded => Ok(Dictionary::embedded()),
            DictionarySource::File(path) => Dictionary::load(path),
        }
    }
}

/// Loads a dictionary on a background thread.
pub struct DictionaryLoader {
    rx: Option<Receiver<Result<Dictionary, DictionaryError>>>,
}

impl DictionaryLoader {
    pub fn spawn(source: DictionarySource) -> Self {
        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = source.load();
            // The receiver may already be gone if the game quit first.
            let _ = tx.send(result);
        });
        Self { rx: Some(rx) }
    }

    /// Take the loaded dictionary if it has arrived (non-blocking).
    /// Yields the result exactly once.
    pub fn try_take(&mut self) -> Option<Result<Dictionary, DictionaryError>> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(DictionaryError::LoaderGone),
        };
        self.rx = None;
        Some(result)
    }

    /// Whether a result is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}
