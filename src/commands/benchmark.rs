//! Benchmark command
//!
//! Measures how many random draws code generation needs across many codes.

use crate::core::Alphabet;
use crate::generator::{GenerateError, generate_with};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub length: usize,
    pub alphabet: Alphabet,
    pub count: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(length: usize, alphabet: Alphabet, count: usize) -> Self {
        Self {
            length,
            alphabet,
            count,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub length: usize,
    pub alphabet: Alphabet,
    pub total_codes: usize,
    pub total_draws: usize,
    pub average_draws: f64,
    pub min_draws: usize,
    pub max_draws: usize,
    pub duration: Duration,
    pub codes_per_second: f64,
}

impl BenchmarkResult {
    /// Share of draws that were kept (1.0 means no draw was rejected)
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_draws == 0 {
            return 0.0;
        }
        (self.total_codes * self.length) as f64 / self.total_draws as f64
    }
}

/// Generate `config.count` codes in parallel and collect draw statistics
///
/// # Errors
///
/// Returns `GenerateError` if the length does not fit the alphabet.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(config: BenchmarkConfig) -> Result<BenchmarkResult, GenerateError> {
    let progress = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let draws: Vec<usize> = (0..config.count)
        .into_par_iter()
        .map_init(rand::rng, |rng, _| {
            let generation = generate_with(rng, config.length, config.alphabet)?;
            progress.inc(1);
            Ok(generation.draws)
        })
        .collect::<Result<_, GenerateError>>()?;

    progress.finish_and_clear();
    let duration = start.elapsed();

    let total_codes = draws.len();
    let total_draws: usize = draws.iter().sum();
    let (average_draws, codes_per_second) = if total_codes == 0 {
        (0.0, 0.0)
    } else {
        (
            total_draws as f64 / total_codes as f64,
            total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    debug!(total_codes, total_draws, ?duration, "Benchmark finished");

    Ok(BenchmarkResult {
        length: config.length,
        alphabet: config.alphabet,
        total_codes,
        total_draws,
        average_draws,
        min_draws: draws.iter().copied().min().unwrap_or(0),
        max_draws: draws.iter().copied().max().unwrap_or(0),
        duration,
        codes_per_second,
    })
}
