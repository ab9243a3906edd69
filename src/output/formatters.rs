//! Formatting utilities for game messages

use crate::core::{Alphabet, Score};

/// Describe the prepared secret without revealing it
///
/// # Examples
/// ```
/// use bulls_cows::core::Alphabet;
/// use bulls_cows::output::formatters::symbol_message;
///
/// let alphabet = Alphabet::new(16).unwrap();
/// assert_eq!(
///     symbol_message(4, alphabet),
///     "The secret code is prepared: **** (0-9, a-f)."
/// );
/// ```
#[must_use]
pub fn symbol_message(code_length: usize, alphabet: Alphabet) -> String {
    format!(
        "The secret code is prepared: {} ({}).",
        "*".repeat(code_length),
        symbol_range(alphabet)
    )
}

/// Human-readable range of symbols, e.g. `0-9, a-f`
#[must_use]
pub fn symbol_range(alphabet: Alphabet) -> String {
    let last = alphabet.last();
    match alphabet.len() {
        1 => "0".to_string(),
        2..=10 => format!("0-{last}"),
        11 => "0-9, a".to_string(),
        _ => format!("0-9, a-{last}"),
    }
}

/// Feedback line for one scored guess
#[must_use]
pub fn grade_message(score: Score) -> String {
    match (score.bulls(), score.cows()) {
        (0, 0) => "Grade: None.".to_string(),
        (bulls, 0) => format!("Grade: {bulls} bull(s)"),
        (0, cows) => format!("Grade: {cows} cow(s)"),
        (bulls, cows) => format!("Grade: {bulls} bull(s) and {cows} cow(s)."),
    }
}

/// Final message once the code is found
#[must_use]
pub fn congratulation_message(secret: &impl std::fmt::Display) -> String {
    format!("Congratulations! You guessed the secret code: {secret}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
