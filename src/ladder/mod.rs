//! Word ladder search
//!
//! [`PatternIndex`] answers "which words are one letter away", [`LadderSearch`]
//! walks that graph best-first, and [`LadderSolver`] validates raw query words and
//! ties the two together for a dictionary.

mod index;
mod search;
mod solver;

pub use index::{PatternIndex, Visited};
pub use search::{LadderSearch, SearchPath, SearchReport};
pub use solver::{LadderError, LadderQuery, LadderResult, LadderSolver};
