//! Secret code generation
//!
//! Codes are built by rejection sampling: draw a uniformly random symbol from
//! the whole alphabet, keep it if it has not been used yet, and repeat until
//! the code is long enough. Drawing from the full alphabet every time keeps
//! each symbol equally likely at each position.

use crate::core::{Alphabet, SecretCode};
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// Error type for impossible generation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("code length must be at least 1")]
    EmptyCode,
    #[error("cannot draw {length} distinct symbols from an alphabet of {alphabet_size}")]
    AlphabetTooSmall { length: usize, alphabet_size: usize },
}

/// A generated code together with the number of random draws it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub code: SecretCode,
    pub draws: usize,
}

/// Generate a secret code using the thread-local RNG
///
/// # Errors
/// Returns `GenerateError` if `length` is zero or larger than the alphabet.
///
/// # Examples
/// ```
/// use bulls_cows::core::Alphabet;
/// use bulls_cows::generator::generate;
///
/// let alphabet = Alphabet::new(10).unwrap();
/// let code = generate(4, alphabet).unwrap();
///
/// assert_eq!(code.len(), 4);
/// assert!(code.symbols().iter().all(|&s| alphabet.contains(s)));
/// ```
pub fn generate(length: usize, alphabet: Alphabet) -> Result<SecretCode, GenerateError> {
    generate_with(&mut rand::rng(), length, alphabet).map(|generation| generation.code)
}

/// Generate a secret code from the given RNG, counting draws
///
/// # Errors
/// Returns `GenerateError` if `length` is zero or larger than the alphabet.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    length: usize,
    alphabet: Alphabet,
) -> Result<Generation, GenerateError> {
    if length == 0 {
        return Err(GenerateError::EmptyCode);
    }
    if length > alphabet.len() {
        return Err(GenerateError::AlphabetTooSmall {
            length,
            alphabet_size: alphabet.len(),
        });
    }

    let mut symbols = Vec::with_capacity(length);
    let mut used: FxHashSet<char> = FxHashSet::default();
    let mut draws = 0;

    while symbols.len() < length {
        draws += 1;
        let index = rng.random_range(0..alphabet.len());
        // index < alphabet.len(), so the symbol always exists
        let Some(symbol) = alphabet.symbol(index) else {
            continue;
        };
        if used.insert(symbol) {
            symbols.push(symbol);
        }
    }

    debug!(length, alphabet_size = alphabet.len(), draws, "Generated secret code");

    Ok(Generation {
        code: SecretCode::from_symbols(symbols),
        draws,
    })
}
