//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    NO_LADDER, print_benchmark_result, print_neighbor_report, print_search_stats, write_error,
    write_goal_warning, write_ladder, write_no_ladder,
};
