//! Hamming distance between words

use super::Word;

/// Count the positions where `a` and `b` hold different letters
///
/// Both words must have the same length; callers validate this once at the
/// entry point before any search runs.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, hamming};
///
/// let todd = Word::new("todd").unwrap();
/// let john = Word::new("john").unwrap();
/// assert_eq!(hamming(&todd, &john), 3);
/// ```
#[inline]
#[must_use]
pub fn hamming(a: &Word, b: &Word) -> usize {
    debug_assert_eq!(a.len(), b.len(), "hamming distance needs equal lengths");

    a.bytes()
        .iter()
        .zip(b.bytes())
        .filter(|(x, y)| x != y)
        .count()
}
