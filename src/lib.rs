//! Word Ladder
//!
//! Finds a chain of dictionary words between two words of equal length, changing one
//! letter per step, using a pattern-indexed adjacency graph and a cost-guided
//! best-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::dictionary::Dictionary;
//! use word_ladder::ladder::LadderSolver;
//!
//! let dictionary = Dictionary::from_words(["cold", "cord", "card", "ward", "warm"]);
//! let solver = LadderSolver::new(&dictionary);
//!
//! let result = solver.min_ladder("cold", "warm").unwrap();
//! for word in result.path.unwrap().words() {
//!     println!("{}", word.to_uppercase());
//! }
//! ```

// Core domain types
pub mod core;

// Pattern index and ladder search
pub mod ladder;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
