//! Cost-guided best-first search over a [`PatternIndex`]
//!
//! # Scoring
//!
//! A frontier entry reached through path `P + [n]` gets priority
//! `priority(P) + hamming(n, goal)`. The goal distance of every rung is summed
//! along the path, so the search prefers ladders whose words stay close to the
//! goal. This is intentionally not hop-count BFS and not classical A*: the
//! heuristic accumulates per rung, so neither the shortest ladder nor A*
//! optimality is guaranteed.
//!
//! # Termination
//!
//! A word is marked visited when it is first pushed and is never pushed again,
//! so each search over a finite index ends.

use super::index::{PatternIndex, Visited};
use crate::core::{Word, hamming};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A ladder found by the search
///
/// Never empty; the first word is the search's start word and consecutive words
/// are one letter apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    words: Vec<Word>,
}

impl SearchPath {
    /// Words of the ladder, start first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of rungs, including the start word
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-letter changes made
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// First word of the ladder
    ///
    /// A path always holds at least its start word, so this never fails.
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the ladder; the start word when no step was taken
    #[must_use]
    pub fn end(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Check that every consecutive pair differs in exactly one letter
    #[must_use]
    pub fn is_ladder(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| pair[0].len() == pair[1].len() && hamming(&pair[0], &pair[1]) == 1)
    }

    /// Cumulative priority the search assigned to this path for `goal`
    #[must_use]
    pub fn total_cost(&self, goal: &Word) -> usize {
        self.words.iter().skip(1).map(|w| hamming(w, goal)).sum()
    }
}

/// Outcome of one search run
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// `None` when the goal is unreachable
    pub path: Option<SearchPath>,
    /// Frontier entries popped
    pub expanded: usize,
    /// Frontier entries pushed, including the start entry
    pub enqueued: usize,
}

/// Frontier entry ordered by priority, then insertion sequence
#[derive(Debug)]
struct FrontierEntry {
    priority: usize,
    sequence: u64,
    word: Word,
    path: Vec<Word>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Best-first ladder search over one index
///
/// Every call to [`search`](Self::search) builds its own frontier and visited map;
/// nothing carries over between runs.
pub struct LadderSearch<'a> {
    index: &'a PatternIndex,
}

impl<'a> LadderSearch<'a> {
    #[must_use]
    pub const fn new(index: &'a PatternIndex) -> Self {
        Self { index }
    }

    /// Find a ladder from `start` to `goal`, or `None` if none exists
    ///
    /// Both words must have the index's word length.
    #[must_use]
    pub fn min_path(&self, start: &Word, goal: &Word) -> Option<SearchPath> {
        self.search(start, goal).path
    }

    /// Run the search and report the path together with frontier counters
    #[must_use]
    pub fn search(&self, start: &Word, goal: &Word) -> SearchReport {
        debug_assert_eq!(start.len(), goal.len(), "start and goal lengths differ");

        let mut visited = Visited::default();
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;
        let mut expanded = 0;
        let mut enqueued = 1;

        frontier.push(Reverse(FrontierEntry {
            priority: 0,
            sequence,
            word: start.clone(),
            path: vec![start.clone()],
        }));

        while let Some(Reverse(entry)) = frontier.pop() {
            expanded += 1;

            if entry.word == *goal {
                return SearchReport {
                    path: Some(SearchPath { words: entry.path }),
                    expanded,
                    enqueued,
                };
            }

            for adjacent in self.index.neighbors_of(&entry.word, &visited) {
                let cost = entry.priority + hamming(adjacent, goal);
                visited.insert(adjacent.clone(), cost);

                let mut path = Vec::with_capacity(entry.path.len() + 1);
                path.extend_from_slice(&entry.path);
                path.push(adjacent.clone());

                sequence += 1;
                enqueued += 1;
                frontier.push(Reverse(FrontierEntry {
                    priority: cost,
                    sequence,
                    word: adjacent.clone(),
                    path,
                }));
            }
        }

        SearchReport {
            path: None,
            expanded,
            enqueued,
        }
    }
}
