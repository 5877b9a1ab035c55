//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lower-cased; blank lines, `#` comments and entries that
/// are not valid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::dictionary::loader::load_from_file;
///
/// let words = load_from_file("dict.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(content.lines()))
}

/// Convert a string slice list to Words
///
/// # Examples
/// ```
/// use word_ladder::dictionary::loader::words_from_slice;
/// use word_ladder::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_lines(slice.iter().copied())
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
