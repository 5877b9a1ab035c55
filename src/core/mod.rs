//! Core domain types for word ladders
//!
//! This module contains the fundamental value types: words, wildcard patterns and
//! the Hamming distance between words. Everything here is pure and side-effect free.

mod distance;
mod pattern;
mod word;

pub use distance::hamming;
pub use pattern::Pattern;
pub use word::{Word, WordError};
