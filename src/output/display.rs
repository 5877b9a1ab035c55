//! Display functions for command results

use super::formatters::{closeness_bar, create_progress_bar, format_rung};
use crate::commands::{BenchmarkResult, LadderStep, NeighborReport, SolveResult};
use colored::Colorize;
use std::io::{self, Write};

/// Message printed when no ladder connects the words
pub const NO_LADDER: &str = "No known ladder.";

/// Write a solved ladder, one `WORD (distance)` line per rung
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_ladder(out: &mut impl Write, steps: &[LadderStep]) -> io::Result<()> {
    for step in steps {
        writeln!(out, "{}", format_rung(&step.word, step.distance))?;
    }
    Ok(())
}

/// Print search statistics for a solved ladder
pub fn print_search_stats(result: &SolveResult) {
    let word_length = result.goal.len();

    println!("\n{}", "─".repeat(60).cyan());
    for step in &result.steps {
        println!(
            "  {:<10} [{}] {}",
            step.word.to_uppercase(),
            closeness_bar(step.distance, word_length, 20).green(),
            step.distance
        );
    }
    println!("{}", "─".repeat(60).cyan());
    println!("  Rungs:       {}", result.steps.len());
    println!(
        "  Total cost:  {}",
        result.total_cost().to_string().bright_yellow()
    );
    println!("  Expanded:    {} frontier entries", result.expanded);
    println!("  Enqueued:    {} frontier entries", result.enqueued);
    println!("  Time taken:  {:.2}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Write the notice for a goal that will be added to the candidates
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_goal_warning(err: &mut impl Write, goal: &str) -> io::Result<()> {
    writeln!(
        err,
        "{}",
        format!("Warning: {goal} is not in dictionary.").yellow()
    )
}

/// Write the notice for an unreachable goal
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_no_ladder(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{NO_LADDER}")
}

/// Write a rejected query
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_error(err: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(err, "{}", message.red())
}

/// Print the neighbors of a word grouped by pattern
pub fn print_neighbor_report(report: &NeighborReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.in_dictionary {
        println!("  {}", "(not in dictionary)".yellow());
    }

    for group in &report.groups {
        let words: Vec<String> = group.words.iter().map(|w| w.to_uppercase()).collect();
        let listing = if words.is_empty() {
            "-".bright_black().to_string()
        } else {
            words.join(" ")
        };
        println!("  {:<10} {listing}", group.pattern.to_uppercase());
    }

    println!(
        "\n  {} neighbors among {} words of length {}",
        report.total().to_string().bright_yellow().bold(),
        report.same_length,
        report.word.len()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Word length:      {} ({} candidates)",
        result.word_length, result.candidates
    );
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Ladders found:    {}",
        result.found.to_string().green()
    );
    if result.not_found > 0 {
        println!(
            "   No ladder:        {}",
            result.not_found.to_string().red()
        );
    }
    println!(
        "   Average rungs:    {}",
        format!("{:.2}", result.average_rungs).bright_yellow().bold()
    );
    println!("   Average expanded: {:.1}", result.average_expanded);
    if let Some((start, goal, rungs)) = &result.longest {
        println!(
            "   Longest ladder:   {} → {} ({rungs} rungs)",
            start.to_uppercase(),
            goal.to_uppercase()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Rung distribution:".bright_cyan().bold());
    let mut lengths: Vec<usize> = result.distribution.keys().copied().collect();
    lengths.sort_unstable();
    for rungs in lengths {
        let count = result.distribution[&rungs];
        let pct = count as f64 / result.found as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {rungs:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
