//! Wildcard patterns used as adjacency buckets
//!
//! A pattern is a word with exactly one position replaced by [`Pattern::WILDCARD`].
//! Two words of the same length are one letter apart iff they share a pattern.
//!
//! For a word of length L there are exactly L patterns, one per position:
//!
//! ```text
//! cat -> ?at, c?t, ca?
//! ```

use super::Word;
use std::fmt;

/// One single-position wildcard variant of a word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    text: Box<str>,
    position: usize,
}

impl Pattern {
    /// Placeholder character; never valid inside a [`Word`]
    pub const WILDCARD: char = '?';

    /// Build the variant of `word` with `position` replaced by the wildcard
    ///
    /// # Panics
    /// Panics in debug mode if `position >= word.len()`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Pattern, Word};
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(Pattern::wildcard(&word, 1).text(), "c?t");
    /// ```
    #[must_use]
    pub fn wildcard(word: &Word, position: usize) -> Self {
        debug_assert!(position < word.len(), "wildcard position out of range");

        let text: String = word
            .text()
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == position { Self::WILDCARD } else { ch })
            .collect();

        Self {
            text: text.into_boxed_str(),
            position,
        }
    }

    /// All wildcard variants of `word`, in ascending position order
    ///
    /// Always yields exactly `word.len()` patterns.
    pub fn variants(word: &Word) -> impl Iterator<Item = Self> + '_ {
        (0..word.len()).map(move |position| Self::wildcard(word, position))
    }

    /// Pattern text, e.g. `c?t`
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the wildcard character
    #[inline]
    #[must_use]
    pub const fn wildcard_position(&self) -> usize {
        self.position
    }

    /// Length of the words this pattern matches
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
