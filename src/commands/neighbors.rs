//! Neighbor inspection command
//!
//! Lists the dictionary words one letter away from a word, grouped by the
//! wildcard pattern that links them.

use crate::core::{Pattern, Word, WordError};
use crate::dictionary::Dictionary;
use crate::ladder::PatternIndex;

/// Words sharing one wildcard pattern with the inspected word
pub struct NeighborGroup {
    pub pattern: String,
    pub words: Vec<String>,
}

/// Result of inspecting a word
pub struct NeighborReport {
    pub word: String,
    pub in_dictionary: bool,
    /// One group per wildcard position, in position order
    pub groups: Vec<NeighborGroup>,
    /// Dictionary words with the same length
    pub same_length: usize,
}

impl NeighborReport {
    /// Total neighbors across all groups
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.words.len()).sum()
    }
}

/// Find every dictionary word one letter away from `word`
///
/// # Errors
///
/// Returns an error if `word` is not a valid word.
pub fn find_neighbors(word: &str, dictionary: &Dictionary) -> Result<NeighborReport, WordError> {
    let word = Word::new(word.trim())?;
    let index = PatternIndex::build(dictionary.of_length(word.len()), word.len());

    let groups = Pattern::variants(&word)
        .map(|pattern| NeighborGroup {
            words: index
                .bucket(&pattern)
                .iter()
                .filter(|candidate| **candidate != word)
                .map(|candidate| candidate.text().to_string())
                .collect(),
            pattern: pattern.text().to_string(),
        })
        .collect();

    Ok(NeighborReport {
        in_dictionary: dictionary.contains(&word),
        word: word.text().to_string(),
        groups,
        same_length: index.word_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_grouped_by_pattern() {
        let dictionary = Dictionary::from_words(["cat", "bat", "cot", "cut", "cab", "dog"]);
        let report = find_neighbors("cat", &dictionary).unwrap();

        assert!(report.in_dictionary);
        assert_eq!(report.same_length, 6);
        assert_eq!(report.total(), 4);

        let patterns: Vec<&str> = report.groups.iter().map(|g| g.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["?at", "c?t", "ca?"]);
        assert_eq!(report.groups[0].words, vec!["bat"]);
        assert_eq!(report.groups[1].words, vec!["cot", "cut"]);
        assert_eq!(report.groups[2].words, vec!["cab"]);
    }

    #[test]
    fn neighbors_of_unknown_word() {
        let dictionary = Dictionary::from_words(["cot", "cut"]);
        let report = find_neighbors("CAT", &dictionary).unwrap();

        assert_eq!(report.word, "cat");
        assert!(!report.in_dictionary);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn neighbors_invalid_word() {
        let dictionary = Dictionary::from_words(["cat"]);
        assert!(find_neighbors("c@t", &dictionary).is_err());
    }

    #[test]
    fn neighbors_none_for_isolated_word() {
        let dictionary = Dictionary::from_words(["zzzz", "aaaa"]);
        let report = find_neighbors("zzzz", &dictionary).unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(report.groups.len(), 4);
    }
}
