//! Word source for secrets and guess validation
//!
//! [`Dictionary`] loads its list lazily on first use. The load runs once
//! even when many threads ask at the same time.

use super::loader::{load_from_file, parse_word_list};
use super::WORDS;
use crate::core::Word;
use once_cell::sync::OnceCell;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by a word source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word source is empty")]
    Empty,
    #[error("failed to load word list from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Supplies secret words and decides which guesses are real words
pub trait WordSource {
    /// Pick a random word from the source
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be loaded or holds no words.
    fn generate_word(&self) -> Result<Word, SourceError>;

    /// Case-insensitive membership test
    ///
    /// Never fails: unknown words and load failures both report `false`.
    fn is_word_valid(&self, word: &str) -> bool;
}

impl<T: WordSource + ?Sized> WordSource for Arc<T> {
    fn generate_word(&self) -> Result<Word, SourceError> {
        (**self).generate_word()
    }

    fn is_word_valid(&self, word: &str) -> bool {
        (**self).is_word_valid(word)
    }
}

#[derive(Debug, Clone)]
enum ListOrigin {
    Embedded,
    File(PathBuf),
    Inline(Vec<String>),
}

#[derive(Debug)]
struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    fn build(candidates: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = candidates
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();
        Self { words, index }
    }
}

/// A lazily loaded word list
#[derive(Debug)]
pub struct Dictionary {
    origin: ListOrigin,
    list: OnceCell<WordList>,
}

impl Dictionary {
    /// Dictionary backed by the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::with_origin(ListOrigin::Embedded)
    }

    /// Dictionary backed by a word list file, one word per line
    ///
    /// The file is not read until the dictionary is first used.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::with_origin(ListOrigin::File(path.into()))
    }

    /// Dictionary over an explicit set of words
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_origin(ListOrigin::Inline(
            words.into_iter().map(Into::into).collect(),
        ))
    }

    const fn with_origin(origin: ListOrigin) -> Self {
        Self {
            origin,
            list: OnceCell::new(),
        }
    }

    /// Load the word list now instead of on first use
    ///
    /// Calling this more than once is harmless; only the first successful
    /// load does any work.
    ///
    /// # Errors
    /// Returns `SourceError::Load` if the backing file cannot be read.
    pub fn initialize(&self) -> Result<(), SourceError> {
        self.list().map(|_| ())
    }

    /// Whether the word list has been loaded yet
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.list.get().is_some()
    }

    /// Number of distinct words, loading the list if needed
    ///
    /// # Errors
    /// Returns `SourceError::Load` if the backing file cannot be read.
    pub fn len(&self) -> Result<usize, SourceError> {
        self.list().map(|list| list.words.len())
    }

    /// Whether the loaded list holds no words
    ///
    /// # Errors
    /// Returns `SourceError::Load` if the backing file cannot be read.
    pub fn is_empty(&self) -> Result<bool, SourceError> {
        self.len().map(|n| n == 0)
    }

    fn list(&self) -> Result<&WordList, SourceError> {
        self.list.get_or_try_init(|| {
            let words = match &self.origin {
                ListOrigin::Embedded => parse_word_list(WORDS.iter().copied()),
                ListOrigin::File(path) => {
                    load_from_file(path).map_err(|source| SourceError::Load {
                        path: path.clone(),
                        source,
                    })?
                }
                ListOrigin::Inline(words) => parse_word_list(words.iter().map(String::as_str)),
            };
            let list = WordList::build(words);
            debug!(origin = ?self.origin, words = list.words.len(), "word list loaded");
            Ok(list)
        })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl WordSource for Dictionary {
    fn generate_word(&self) -> Result<Word, SourceError> {
        self.list()?
            .words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SourceError::Empty)
    }

    fn is_word_valid(&self, word: &str) -> bool {
        match self.list() {
            Ok(list) => list.index.contains(&word.to_lowercase()),
            Err(err) => {
                warn!(error = %err, "word list unavailable, rejecting word");
                false
            }
        }
    }
}
