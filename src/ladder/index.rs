//! Pattern-indexed adjacency over a word list
//!
//! Each word of the indexed length is registered under all of its wildcard
//! patterns. Looking up a word's own patterns then yields every word exactly one
//! letter away without comparing against the whole vocabulary.

use crate::core::{Pattern, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Words already placed on the frontier, mapped to the priority they were given
pub type Visited = FxHashMap<Word, usize>;

/// Mapping from wildcard pattern to the words producing it
///
/// Built once for a fixed word length and never modified afterwards. Buckets keep
/// insertion order and hold each word at most once.
#[derive(Debug, Clone, Default)]
pub struct PatternIndex {
    word_length: usize,
    word_count: usize,
    buckets: FxHashMap<Pattern, Vec<Word>>,
}

impl PatternIndex {
    /// Build an index over every word of `word_length` in `words`
    ///
    /// Words of any other length are skipped silently, as are repeated entries.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::ladder::{PatternIndex, Visited};
    ///
    /// let words: Vec<Word> = ["cat", "cot", "dog", "cart"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let index = PatternIndex::build(&words, 3);
    ///
    /// let cat = Word::new("cat").unwrap();
    /// let neighbors = index.neighbors_of(&cat, &Visited::default());
    /// assert_eq!(neighbors, vec![&words[1]]);
    /// ```
    pub fn build<'w, I>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut buckets: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();
        let mut seen: FxHashSet<&Word> = FxHashSet::default();

        for word in words {
            if word.len() != word_length || !seen.insert(word) {
                continue;
            }
            for pattern in Pattern::variants(word) {
                buckets.entry(pattern).or_default().push(word.clone());
            }
        }

        Self {
            word_length,
            word_count: seen.len(),
            buckets,
        }
    }

    /// Unvisited words one letter away from `word`
    ///
    /// Order is by wildcard position ascending, then bucket insertion order. The
    /// word itself is never returned. No deduplication is applied across buckets.
    pub fn neighbors_of<'a>(&'a self, word: &Word, visited: &Visited) -> Vec<&'a Word> {
        let mut neighbors = Vec::new();

        for pattern in Pattern::variants(word) {
            let Some(bucket) = self.buckets.get(&pattern) else {
                continue;
            };
            neighbors.extend(
                bucket
                    .iter()
                    .filter(|candidate| *candidate != word && !visited.contains_key(*candidate)),
            );
        }

        neighbors
    }

    /// Words registered under `pattern`, in insertion order
    #[must_use]
    pub fn bucket(&self, pattern: &Pattern) -> &[Word] {
        self.buckets.get(pattern).map_or(&[], Vec::as_slice)
    }

    /// Word length this index was built for
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words indexed
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct patterns with at least one word
    #[inline]
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
