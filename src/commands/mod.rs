//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::{ConsoleGame, SimpleOutcome, run_simple};
