//! Ladder word representation
//!
//! A Word is a validated, lower-cased run of ASCII letters. Every rung of a ladder
//! is a Word, and all words in one ladder share the same length.

use std::fmt;
use thiserror::Error;

/// A dictionary word made of lowercase ASCII letters
///
/// Words are immutable once built and compare by exact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word cannot be built from empty text
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hamming distance from this word to `other`
    ///
    /// See [`hamming`](super::hamming) for the length precondition.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> usize {
        super::hamming(self, other)
    }

    /// Upper-cased copy of the text, used for display
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.text.to_ascii_uppercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
