//! Validation of the player's game setup
//!
//! The console reads raw integers; these checks turn them into a code length
//! and an alphabet size the generator can work with. Callers report the error
//! and ask again.

use crate::config::GameConfig;
use crate::core::Alphabet;
use thiserror::Error;

/// Why the chosen symbol count was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCountProblem {
    /// Fewer symbols than code positions, so symbols would have to repeat
    FewerThanLength,
    /// More symbols than the 36 that exist
    MoreThanAvailable,
}

/// Error type for a refused game setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid password length: {length}. Must be between {min} and {max}.")]
    InvalidLength { length: i64, min: usize, max: usize },

    #[error("{}", symbol_count_message(.problem))]
    InvalidSymbolCount {
        symbols: i64,
        length: usize,
        problem: SymbolCountProblem,
    },
}

fn symbol_count_message(problem: &SymbolCountProblem) -> &'static str {
    match problem {
        SymbolCountProblem::FewerThanLength => {
            "Number of symbols cannot be less than the password length."
        }
        SymbolCountProblem::MoreThanAvailable => "Number of symbols cannot be greater than 36.",
    }
}

/// Check a code length against the configured bounds
///
/// Returns the length as a `usize` when it lies within
/// `[min_password_length, max_password_length]`.
///
/// # Errors
/// Returns `ValidationError::InvalidLength` otherwise.
///
/// # Examples
/// ```
/// use bulls_cows::config::GameConfig;
/// use bulls_cows::validation::validate_password_length;
///
/// let config = GameConfig::default();
/// assert_eq!(validate_password_length(4, &config), Ok(4));
/// assert!(validate_password_length(0, &config).is_err());
/// assert!(validate_password_length(37, &config).is_err());
/// ```
pub fn validate_password_length(length: i64, config: &GameConfig) -> Result<usize, ValidationError> {
    let min = config.min_password_length;
    let max = config.max_password_length;

    usize::try_from(length)
        .ok()
        .filter(|len| (min..=max).contains(len))
        .ok_or(ValidationError::InvalidLength { length, min, max })
}

/// Check an alphabet size against an already validated code length
///
/// Returns the alphabet of the first `symbols` symbols.
///
/// # Errors
/// Returns `ValidationError::InvalidSymbolCount` when `symbols < length`
/// or `symbols > 36`.
pub fn validate_number_of_symbols(symbols: i64, length: usize) -> Result<Alphabet, ValidationError> {
    let error = |problem| ValidationError::InvalidSymbolCount {
        symbols,
        length,
        problem,
    };

    // Negative counts are below any valid length
    let Ok(count) = usize::try_from(symbols) else {
        return Err(error(SymbolCountProblem::FewerThanLength));
    };

    if count < length {
        return Err(error(SymbolCountProblem::FewerThanLength));
    }
    // count >= length >= 1 here, so only the upper bound can fail
    Alphabet::new(count).map_err(|_| error(SymbolCountProblem::MoreThanAvailable))
}

/// A fully validated game setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSetup {
    pub length: usize,
    pub alphabet: Alphabet,
}

impl GameSetup {
    /// Validate both numbers at once
    ///
    /// # Errors
    /// Returns the first `ValidationError` encountered, length first.
    pub fn new(length: i64, symbols: i64, config: &GameConfig) -> Result<Self, ValidationError> {
        let length = validate_password_length(length, config)?;
        let alphabet = validate_number_of_symbols(symbols, length)?;
        Ok(Self { length, alphabet })
    }
}
