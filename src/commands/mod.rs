//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbors::{NeighborGroup, NeighborReport, find_neighbors};
pub use solve::{LadderStep, SolveConfig, SolveOutcome, SolveResult, run_solve, solve_ladder};
