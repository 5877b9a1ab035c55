//! Word Ladder - CLI
//!
//! Prints a ladder between two words, inspects a word's neighbors, or benchmarks the
//! search over random pairs.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::io;
use std::process::ExitCode;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, SolveOutcome, find_neighbors, run_benchmark, run_solve,
    },
    dictionary::{Dictionary, DictionaryCache, DictionarySource},
    ladder::LadderSolver,
    output::{print_benchmark_result, print_neighbor_report, print_search_stats},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find a word ladder between two words of equal length",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to start from
    start: Option<String>,

    /// Word to reach
    goal: Option<String>,

    /// Show search statistics after the ladder
    #[arg(short, long)]
    verbose: bool,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List dictionary words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Solve random word pairs and report aggregate statistics
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length to sample pairs from
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Seed for pair sampling
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// What the arguments ask for, decided before any dictionary is loaded
enum Task {
    Solve(SolveConfig),
    Command(Commands),
}

fn main() -> Result<ExitCode> {
    run(Cli::parse()).map(ExitCode::from)
}

fn run(cli: Cli) -> Result<u8> {
    let task = match (cli.command, cli.start, cli.goal) {
        (Some(command), _, _) => Task::Command(command),
        (None, Some(start), Some(goal)) => Task::Solve(SolveConfig::new(start, goal)),
        _ => {
            eprintln!("{}", Cli::command().render_usage());
            return Ok(1);
        }
    };

    let cache = DictionaryCache::new(DictionarySource::from_arg(&cli.dictionary));
    let dictionary = cache
        .get()
        .with_context(|| format!("Failed to load dictionary {}", cache.source()))?;

    match task {
        Task::Solve(config) => run_solve_command(&config, cli.verbose, dictionary),
        Task::Command(Commands::Neighbors { word }) => run_neighbors_command(&word, dictionary),
        Task::Command(Commands::Benchmark { count, length, seed }) => {
            run_benchmark_command(count, length, seed, dictionary);
            Ok(0)
        }
    }
}

fn run_solve_command(config: &SolveConfig, verbose: bool, dictionary: &Dictionary) -> Result<u8> {
    let solver = LadderSolver::new(dictionary);
    let outcome = run_solve(
        config,
        &solver,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if let (true, SolveOutcome::Solved(result)) = (verbose, &outcome) {
        print_search_stats(result);
    }

    Ok(outcome.exit_code())
}

fn run_neighbors_command(word: &str, dictionary: &Dictionary) -> Result<u8> {
    let report = find_neighbors(word, dictionary)?;
    print_neighbor_report(&report);
    Ok(0)
}

fn run_benchmark_command(count: usize, length: usize, seed: u64, dictionary: &Dictionary) {
    println!("Running benchmark on {count} random pairs of {length}-letter words...");

    let config = BenchmarkConfig {
        seed,
        ..BenchmarkConfig::new(count, length)
    };
    let result = run_benchmark(dictionary, &config);
    print_benchmark_result(&result);
}
