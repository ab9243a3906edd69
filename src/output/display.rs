//! Display functions for command results

use super::formatters::{create_progress_bar, symbol_range};
use crate::commands::BenchmarkResult;
use colored::Colorize;

/// Print the result of a generation benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎲 {}", "Setup:".bright_cyan().bold());
    println!("   Code length:      {}", result.length);
    println!(
        "   Symbols:          {} ({})",
        result.alphabet.len(),
        symbol_range(result.alphabet)
    );
    println!("   Codes generated:  {}", result.total_codes);

    println!("\n📊 {}", "Draws per code:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.2}", result.average_draws).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_draws).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_draws).yellow()
    );

    let acceptance = result.acceptance_rate();
    println!(
        "   Acceptance:       [{}] {:.1}%",
        create_progress_bar(acceptance, 1.0, 30).green(),
        acceptance * 100.0
    );

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);
}
