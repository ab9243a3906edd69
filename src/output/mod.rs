//! Terminal output formatting
//!
//! Message text for the game and pretty-printing for command results.

pub mod display;
pub mod formatters;

pub use display::print_benchmark_result;
pub use formatters::{congratulation_message, grade_message, symbol_message};
