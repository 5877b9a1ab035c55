//! Benchmark command
//!
//! Solves many random start/goal pairs in parallel and aggregates the results.
//! Every query builds its own index and visited map; only the dictionary is shared.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::ladder::{LadderSolver, SearchPath};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub word_length: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, word_length: usize) -> Self {
        Self {
            count,
            word_length,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Outcome of one benchmark query
#[derive(Debug, Clone)]
struct QueryOutcome {
    start: String,
    goal: String,
    rungs: Option<usize>,
    expanded: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_length: usize,
    pub candidates: usize,
    pub total_queries: usize,
    pub found: usize,
    pub not_found: usize,
    /// Average rung count over found ladders
    pub average_rungs: f64,
    pub average_expanded: f64,
    /// Longest ladder found as (start, goal, rungs)
    pub longest: Option<(String, String, usize)>,
    /// Rung count to number of ladders
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Draw `count` random pairs of `word_length` words from the dictionary
///
/// The same seed always yields the same pairs for the same dictionary.
#[must_use]
pub fn sample_pairs(
    dictionary: &Dictionary,
    word_length: usize,
    count: usize,
    seed: u64,
) -> Vec<(Word, Word)> {
    let pool: Vec<&Word> = dictionary.of_length(word_length).collect();
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map_while(|_| {
            let start = pool.choose(&mut rng)?;
            let goal = pool.choose(&mut rng)?;
            Some(((*start).clone(), (*goal).clone()))
        })
        .collect()
}

/// Run a benchmark over random pairs from the dictionary
#[must_use]
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let pairs = sample_pairs(dictionary, config.word_length, config.count, config.seed);
    let solver = LadderSolver::new(dictionary);

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<QueryOutcome> = pairs
        .par_iter()
        .filter_map(|(from, to)| {
            let result = solver.min_ladder(from.text(), to.text()).ok()?;
            pb.inc(1);
            Some(QueryOutcome {
                start: from.text().to_string(),
                goal: to.text().to_string(),
                rungs: result.path.as_ref().map(SearchPath::len),
                expanded: result.expanded,
            })
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(config, dictionary, &outcomes, duration)
}

fn summarize(
    config: &BenchmarkConfig,
    dictionary: &Dictionary,
    outcomes: &[QueryOutcome],
    duration: Duration,
) -> BenchmarkResult {
    let total_queries = outcomes.len();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_rungs = 0;

    for rungs in outcomes.iter().filter_map(|o| o.rungs) {
        total_rungs += rungs;
        *distribution.entry(rungs).or_insert(0) += 1;
    }

    let found = distribution.values().sum::<usize>();
    let total_expanded: usize = outcomes.iter().map(|o| o.expanded).sum();

    let longest = outcomes
        .iter()
        .filter_map(|o| o.rungs.map(|rungs| (o, rungs)))
        .max_by_key(|(_, rungs)| *rungs)
        .map(|(o, rungs)| (o.start.clone(), o.goal.clone(), rungs));

    BenchmarkResult {
        word_length: config.word_length,
        candidates: dictionary.of_length(config.word_length).count(),
        total_queries,
        found,
        not_found: total_queries - found,
        average_rungs: if found > 0 {
            total_rungs as f64 / found as f64
        } else {
            0.0
        },
        average_expanded: if total_queries > 0 {
            total_expanded as f64 / total_queries as f64
        } else {
            0.0
        },
        longest,
        distribution,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
