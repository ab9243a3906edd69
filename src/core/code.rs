//! Secret code and guess representation

use super::alphabet::{Alphabet, MAX_SYMBOLS};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for invalid secret codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("secret code must not be empty")]
    Empty,
    #[error("secret code can hold at most 36 symbols, got {0}")]
    TooLong(usize),
    #[error("'{0}' is not a symbol (use 0-9 and a-z)")]
    InvalidSymbol(char),
    #[error("symbol '{0}' appears more than once")]
    DuplicateSymbol(char),
}

/// The hidden code the player has to find
///
/// Every symbol is a base-36 symbol and no symbol appears twice. A code is
/// built once per game and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretCode {
    symbols: Vec<char>,
}

impl SecretCode {
    /// Build a code from symbols already known to be distinct alphabet members
    pub(crate) fn from_symbols(symbols: Vec<char>) -> Self {
        debug_assert!(!symbols.is_empty());
        debug_assert_eq!(
            symbols.iter().collect::<FxHashSet<_>>().len(),
            symbols.len(),
            "secret code symbols must be distinct"
        );
        Self { symbols }
    }

    /// Parse a secret code from text
    ///
    /// # Errors
    /// Returns `CodeError` if the text is empty, longer than 36 symbols,
    /// contains a character outside `0-9a-z`, or repeats a symbol.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::SecretCode;
    ///
    /// let code = SecretCode::parse("4a7").unwrap();
    /// assert_eq!(code.len(), 3);
    ///
    /// assert!(SecretCode::parse("447").is_err());
    /// assert!(SecretCode::parse("4A7").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let symbols: Vec<char> = text.chars().collect();

        if symbols.is_empty() {
            return Err(CodeError::Empty);
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(CodeError::TooLong(symbols.len()));
        }

        let mut seen = FxHashSet::default();
        for &symbol in &symbols {
            if !Alphabet::FULL.contains(symbol) {
                return Err(CodeError::InvalidSymbol(symbol));
            }
            if !seen.insert(symbol) {
                return Err(CodeError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols })
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a secret code holds at least one symbol
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The code's symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Smallest alphabet that contains every symbol of this code
    #[must_use]
    pub fn minimal_alphabet(&self) -> Alphabet {
        let highest = self
            .symbols
            .iter()
            .filter_map(|&s| Alphabet::FULL.index_of(s))
            .max()
            .unwrap_or(0);
        Alphabet::new(highest + 1).unwrap_or(Alphabet::FULL)
    }
}

impl FromStr for SecretCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// A player's guess
///
/// Any text is accepted: guesses may be shorter or longer than the secret and
/// may repeat symbols. Symbols are compared exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    symbols: Vec<char>,
}

impl Guess {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            symbols: text.chars().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl From<&str> for Guess {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&SecretCode> for Guess {
    fn from(code: &SecretCode) -> Self {
        Self {
            symbols: code.symbols.clone(),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
