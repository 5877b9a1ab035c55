//! Ladder solving command
//!
//! Solves one start/goal query and returns the ladder with per-rung distances.
//! [`run_solve`] also writes the query's terminal output and decides its exit
//! status.

use crate::core::hamming;
use crate::ladder::{LadderError, LadderResult, LadderSolver};
use crate::output::{write_error, write_goal_warning, write_ladder, write_no_ladder};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Configuration for one ladder query
pub struct SolveConfig {
    pub start: String,
    pub goal: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, goal: String) -> Self {
        Self { start, goal }
    }
}

/// A single rung of the ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderStep {
    pub word: String,
    /// Hamming distance to the goal word
    pub distance: usize,
}

/// Result of solving a ladder query
pub struct SolveResult {
    pub start: String,
    pub goal: String,
    /// Empty when no ladder exists
    pub steps: Vec<LadderStep>,
    pub found: bool,
    pub goal_in_dictionary: bool,
    pub expanded: usize,
    pub enqueued: usize,
    pub duration: Duration,
}

impl SolveResult {
    /// Cumulative goal distance over every rung after the start
    #[must_use]
    pub fn total_cost(&self) -> usize {
        self.steps.iter().skip(1).map(|s| s.distance).sum()
    }
}

/// Solve a ladder query using the given solver
///
/// # Errors
///
/// Returns an error if the words differ in length or are not valid words.
pub fn solve_ladder(
    config: &SolveConfig,
    solver: &LadderSolver,
) -> Result<SolveResult, LadderError> {
    let started = Instant::now();
    let result = solver.min_ladder(&config.start, &config.goal)?;
    Ok(into_solve_result(&result, started.elapsed()))
}

/// How a ladder query ended on the command line
pub enum SolveOutcome {
    Solved(SolveResult),
    NoLadder(SolveResult),
    Rejected(LadderError),
}

impl SolveOutcome {
    /// Process exit code: 0 for a ladder, 1 otherwise
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Solved(_) => 0,
            Self::NoLadder(_) | Self::Rejected(_) => 1,
        }
    }
}

/// Solve a query and write its output
///
/// Rungs and the no-ladder notice go to `out`; the rejection message and the
/// missing-goal warning go to `err`. The warning is written before the search
/// starts.
///
/// # Errors
///
/// Returns an error only if writing fails; a rejected query is an outcome.
pub fn run_solve(
    config: &SolveConfig,
    solver: &LadderSolver,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<SolveOutcome> {
    let started = Instant::now();

    let query = match solver.prepare(&config.start, &config.goal) {
        Ok(query) => query,
        Err(rejected) => {
            write_error(err, &rejected.to_string())?;
            return Ok(SolveOutcome::Rejected(rejected));
        }
    };

    if !query.goal_in_dictionary() {
        write_goal_warning(err, query.goal().text())?;
    }

    let result = into_solve_result(&query.run(), started.elapsed());
    if !result.found {
        write_no_ladder(out)?;
        return Ok(SolveOutcome::NoLadder(result));
    }

    write_ladder(out, &result.steps)?;
    Ok(SolveOutcome::Solved(result))
}

fn into_solve_result(result: &LadderResult, duration: Duration) -> SolveResult {
    let steps = result
        .path
        .as_ref()
        .map(|path| {
            path.words()
                .iter()
                .map(|word| LadderStep {
                    word: word.text().to_string(),
                    distance: hamming(word, &result.goal),
                })
                .collect()
        })
        .unwrap_or_default();

    SolveResult {
        start: result.start.text().to_string(),
        goal: result.goal.text().to_string(),
        steps,
        found: result.found(),
        goal_in_dictionary: result.goal_in_dictionary,
        expanded: result.expanded,
        enqueued: result.enqueued,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn solve(dictionary: &Dictionary, start: &str, goal: &str) -> Result<SolveResult, LadderError> {
        let solver = LadderSolver::new(dictionary);
        solve_ladder(
            &SolveConfig::new(start.to_string(), goal.to_string()),
            &solver,
        )
    }

    #[test]
    fn solve_records_distances() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let result = solve(&dictionary, "cat", "dog").unwrap();

        assert!(result.found);
        let distances: Vec<(&str, usize)> = result
            .steps
            .iter()
            .map(|s| (s.word.as_str(), s.distance))
            .collect();
        assert_eq!(
            distances,
            vec![("cat", 3), ("cot", 2), ("cog", 1), ("dog", 0)]
        );
        assert_eq!(result.total_cost(), 3);
    }

    #[test]
    fn solve_distances_use_lowercased_goal() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let result = solve(&dictionary, "CAT", "DOG").unwrap();

        assert_eq!(result.goal, "dog");
        assert_eq!(result.steps.last().map(|s| s.distance), Some(0));
    }

    #[test]
    fn solve_no_path() {
        let dictionary = Dictionary::from_words(["aaaa", "mmmm"]);
        let result = solve(&dictionary, "aaaa", "zzzz").unwrap();

        assert!(!result.found);
        assert!(result.steps.is_empty());
        assert!(!result.goal_in_dictionary);
    }

    #[test]
    fn solve_length_mismatch() {
        let dictionary = Dictionary::from_words(["cat"]);
        let result = solve(&dictionary, "cat", "cats");
        assert!(matches!(result, Err(LadderError::LengthMismatch { .. })));
    }

    #[test]
    fn solve_with_embedded_dictionary() {
        let dictionary = Dictionary::embedded();
        let result = solve(&dictionary, "cold", "warm").unwrap();

        assert!(result.found);
        assert!(result.goal_in_dictionary);
        assert_eq!(result.steps.first().map(|s| s.word.as_str()), Some("cold"));
        assert_eq!(result.steps.last().map(|s| s.word.as_str()), Some("warm"));
    }

    /// Run a query through `run_solve` with captured output
    fn run(dictionary: &Dictionary, start: &str, goal: &str) -> (u8, String, String) {
        colored::control::set_override(false);
        let solver = LadderSolver::new(dictionary);
        let config = SolveConfig::new(start.to_string(), goal.to_string());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let outcome = run_solve(&config, &solver, &mut out, &mut err).unwrap();
        (
            outcome.exit_code(),
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn cli_success_prints_rungs() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let (code, out, err) = run(&dictionary, "cat", "dog");

        assert_eq!(code, 0);
        assert_eq!(out, "CAT (3)\nCOT (2)\nCOG (1)\nDOG (0)\n");
        assert!(err.is_empty());
    }

    #[test]
    fn cli_length_mismatch_fails() {
        let dictionary = Dictionary::from_words(["cat", "cold"]);
        let (code, out, err) = run(&dictionary, "cat", "cold");

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err.trim_end(), "Words must be the same length.");
    }

    #[test]
    fn cli_no_ladder_fails_after_warning() {
        let dictionary = Dictionary::from_words(["aaaa", "mmmm"]);
        let (code, out, err) = run(&dictionary, "aaaa", "zzzz");

        assert_eq!(code, 1);
        assert_eq!(out, "No known ladder.\n");
        assert_eq!(err.trim_end(), "Warning: zzzz is not in dictionary.");
    }

    #[test]
    fn cli_missing_goal_warns_and_still_solves() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog"]);
        let (code, out, err) = run(&dictionary, "cat", "dog");

        assert_eq!(code, 0);
        assert_eq!(err.trim_end(), "Warning: dog is not in dictionary.");
        assert_eq!(out.lines().last(), Some("DOG (0)"));
    }

    #[test]
    fn cli_missing_goal_warning_comes_first() {
        colored::control::set_override(false);
        let dictionary = Dictionary::from_words(["cat", "cot", "cog"]);
        let solver = LadderSolver::new(&dictionary);
        let config = SolveConfig::new("cat".to_string(), "dog".to_string());

        // Both streams share one buffer, so the order of writes is visible
        let shared = std::cell::RefCell::new(Vec::new());
        let mut out = SharedWriter(&shared);
        let mut err = SharedWriter(&shared);
        run_solve(&config, &solver, &mut out, &mut err).unwrap();

        let combined = String::from_utf8(shared.into_inner()).unwrap();
        let lines: Vec<&str> = combined.lines().collect();
        assert_eq!(lines.first(), Some(&"Warning: dog is not in dictionary."));
        assert_eq!(lines.get(1), Some(&"CAT (3)"));
    }

    struct SharedWriter<'a>(&'a std::cell::RefCell<Vec<u8>>);

    impl Write for SharedWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn cli_invalid_word_is_rejected() {
        let dictionary = Dictionary::from_words(["cat"]);
        let (code, out, err) = run(&dictionary, "c4t", "cat");

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("Invalid word"));
    }
}
