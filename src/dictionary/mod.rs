//! Dictionaries for ladder search
//!
//! A [`Dictionary`] is an ordered, duplicate-free list of words owned by the caller
//! and handed to the solver by reference. [`DictionaryCache`] loads one lazily and
//! keeps it for the rest of the process.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Ordered set of dictionary words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    members: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lower-cased. Invalid entries are skipped and repeats
    /// keep their first position.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Cold", "cord", "cold", "c0ld"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(&Word::new("cold").unwrap()));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parsed(
            entries
                .into_iter()
                .filter_map(|entry| Word::new(entry.as_ref().trim()).ok()),
        )
    }

    fn from_parsed(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            if dictionary.members.insert(word.clone()) {
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    /// The word list bundled with the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_parsed(loader::words_from_slice(WORDS))
    }

    /// Load a dictionary file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::from_parsed)
    }

    /// Check whether `word` is a dictionary entry
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// All words, in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words of exactly `length` letters, in load order
    pub fn of_length(&self, length: usize) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter().filter(move |w| w.len() == length)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where a dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    Embedded,
    /// A word file on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Parse a command-line value: `embedded`, or any other value as a path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read the dictionary from this source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(&self) -> io::Result<Dictionary> {
        match self {
            Self::Embedded => Ok(Dictionary::embedded()),
            Self::File(path) => Dictionary::load_from_file(path),
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded ({WORDS_COUNT} words)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read-through cache for one dictionary source
///
/// The first successful [`get`](Self::get) loads the source; every later call
/// returns that same dictionary. The cache is never invalidated. A failed load
/// leaves it empty so the next call retries.
#[derive(Debug)]
pub struct DictionaryCache {
    source: DictionarySource,
    cell: OnceLock<Dictionary>,
}

impl DictionaryCache {
    #[must_use]
    pub const fn new(source: DictionarySource) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &DictionarySource {
        &self.source
    }

    /// Get the cached dictionary, loading it on first use
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source has to be loaded and cannot be read.
    pub fn get(&self) -> io::Result<&Dictionary> {
        if let Some(dictionary) = self.cell.get() {
            return Ok(dictionary);
        }
        let loaded = self.source.load()?;
        Ok(self.cell.get_or_init(|| loaded))
    }

    /// True once a dictionary has been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dict(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_{name}_{}.txt",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(
                (3..=4).contains(&word.len()),
                "Word '{word}' is not 3 or 4 letters"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_no_duplicates() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_contains_classic_ladders() {
        let dictionary = Dictionary::embedded();
        for text in ["cat", "cot", "cog", "dog", "cold", "cord", "card", "ward", "warm"] {
            assert!(
                dictionary.contains(&Word::new(text).unwrap()),
                "missing {text}"
            );
        }
    }

    #[test]
    fn from_words_dedupes_and_keeps_order() {
        let dictionary = Dictionary::from_words(["dog", "CAT", "dog", " cot "]);
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["dog", "cat", "cot"]);
    }

    #[test]
    fn of_length_filters() {
        let dictionary = Dictionary::from_words(["cat", "cold", "dog", "warm", "a"]);
        let three: Vec<&str> = dictionary.of_length(3).map(Word::text).collect();
        assert_eq!(three, vec!["cat", "dog"]);
        assert_eq!(dictionary.of_length(5).count(), 0);
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(
            DictionarySource::from_arg("embedded"),
            DictionarySource::Embedded
        );
        assert_eq!(
            DictionarySource::from_arg("dict.txt"),
            DictionarySource::File(PathBuf::from("dict.txt"))
        );
    }

    #[test]
    fn cache_loads_once() {
        let path = temp_dict("cache", "cat\ncot\n");
        let cache = DictionaryCache::new(DictionarySource::File(path.clone()));
        assert!(!cache.is_loaded());

        let first = cache.get().unwrap();
        assert_eq!(first.len(), 2);

        // Later file changes are not observed
        fs::write(&path, "cat\ncot\ndog\n").unwrap();
        let second = cache.get().unwrap();
        fs::remove_file(&path).unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn cache_failed_load_stays_empty() {
        let cache = DictionaryCache::new(DictionarySource::from_arg(
            "/nonexistent/word_ladder/dict.txt",
        ));
        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());
    }

    #[test]
    fn cache_embedded() {
        let cache = DictionaryCache::new(DictionarySource::Embedded);
        assert_eq!(cache.get().unwrap().len(), WORDS_COUNT);
        assert!(cache.is_loaded());
    }
}
