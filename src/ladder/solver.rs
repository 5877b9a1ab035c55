//! Main word ladder interface

use super::index::PatternIndex;
use super::search::{LadderSearch, SearchPath};
use crate::core::{Word, WordError};
use crate::dictionary::Dictionary;
use thiserror::Error;

/// Reasons a ladder query is rejected before any search runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Start and goal have different lengths
    #[error("Words must be the same length.")]
    LengthMismatch { start: usize, goal: usize },

    /// A query word is not made of letters
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
}

/// Result of a ladder query that passed validation
#[derive(Debug, Clone)]
pub struct LadderResult {
    pub start: Word,
    pub goal: Word,
    /// `None` when no ladder connects the words
    pub path: Option<SearchPath>,
    /// False when the goal had to be added to the candidate set
    pub goal_in_dictionary: bool,
    pub expanded: usize,
    pub enqueued: usize,
}

impl LadderResult {
    #[must_use]
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Word ladder solver over a caller-owned dictionary
///
/// The dictionary is only read. Each query builds its own candidate list, index
/// and visited map, so a solver can be shared across threads.
pub struct LadderSolver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> LadderSolver<'d> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// Find a ladder between two raw words
    ///
    /// Both words are lower-cased. A goal missing from the dictionary is added to
    /// this query's candidates, so it can still end the ladder; the result
    /// reports that through `goal_in_dictionary`.
    ///
    /// # Errors
    ///
    /// Returns `LadderError::LengthMismatch` if the words differ in length and
    /// `LadderError::InvalidWord` if either is not a valid word. An unreachable
    /// goal is not an error; it yields `path: None`.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::Dictionary;
    /// use word_ladder::ladder::LadderSolver;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
    /// let result = LadderSolver::new(&dictionary).min_ladder("CAT", "dog").unwrap();
    ///
    /// let path = result.path.unwrap();
    /// assert_eq!(path.len(), 4);
    /// ```
    pub fn min_ladder(&self, start: &str, goal: &str) -> Result<LadderResult, LadderError> {
        Ok(self.prepare(start, goal)?.run())
    }

    /// Validate a query without searching
    ///
    /// Lengths are compared in characters on the lower-cased text, before the
    /// words are validated, so `éa` against `abc` is a length mismatch.
    ///
    /// # Errors
    ///
    /// Same as [`min_ladder`](Self::min_ladder).
    pub fn prepare(&self, start: &str, goal: &str) -> Result<LadderQuery<'d>, LadderError> {
        let start = start.to_lowercase();
        let goal = goal.to_lowercase();

        let (start_len, goal_len) = (start.chars().count(), goal.chars().count());
        if start_len != goal_len {
            return Err(LadderError::LengthMismatch {
                start: start_len,
                goal: goal_len,
            });
        }

        let start = Word::new(start)?;
        let goal = Word::new(goal)?;
        let goal_in_dictionary = self.dictionary.contains(&goal);

        Ok(LadderQuery {
            dictionary: self.dictionary,
            start,
            goal,
            goal_in_dictionary,
        })
    }
}

/// A validated query whose search has not run yet
pub struct LadderQuery<'d> {
    dictionary: &'d Dictionary,
    start: Word,
    goal: Word,
    goal_in_dictionary: bool,
}

impl LadderQuery<'_> {
    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.goal
    }

    /// False when the goal will be added to this query's candidates
    #[must_use]
    pub const fn goal_in_dictionary(&self) -> bool {
        self.goal_in_dictionary
    }

    /// Index the candidates and run the search
    #[must_use]
    pub fn run(self) -> LadderResult {
        let length = self.goal.len();

        // Per-query candidate list; the dictionary itself is never touched
        let mut candidates: Vec<&Word> = self.dictionary.of_length(length).collect();
        if !self.goal_in_dictionary {
            candidates.push(&self.goal);
        }

        let index = PatternIndex::build(candidates, length);
        let report = LadderSearch::new(&index).search(&self.start, &self.goal);

        LadderResult {
            start: self.start,
            goal: self.goal,
            path: report.path,
            goal_in_dictionary: self.goal_in_dictionary,
            expanded: report.expanded,
            enqueued: report.enqueued,
        }
    }
}
