//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and any entry that is not a valid word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(content.lines()))
}

/// Parse word list entries, one word per entry
///
/// Entries are trimmed. Blank entries, `#` comments and anything that is not
/// a valid word are skipped.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list(["# header", " Crane ", "", "toolong", "slate"]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
pub fn parse_word_list<'a>(entries: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && !entry.starts_with('#'))
        .filter_map(|entry| Word::new(entry).ok())
        .collect()
}
