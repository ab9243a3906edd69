//! Base-36 symbol alphabet
//!
//! Symbols are ordered the way base-36 digits are: '0'-'9' followed by 'a'-'z'.
//! An alphabet of size S is simply the first S of those symbols.

use std::fmt;
use thiserror::Error;

/// Number of distinct symbols available (digits plus lowercase letters)
pub const MAX_SYMBOLS: usize = 36;

const RADIX: u32 = MAX_SYMBOLS as u32;

/// Error type for alphabets that cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet size must be between 1 and 36, got {0}")]
    InvalidSize(usize),
}

/// The ordered set of symbols a code may be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// The full 36-symbol alphabet
    pub const FULL: Self = Self { size: MAX_SYMBOLS };

    /// Create an alphabet of the first `size` base-36 symbols
    ///
    /// # Errors
    /// Returns `AlphabetError::InvalidSize` unless `1 <= size <= 36`.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(12).unwrap();
    /// assert_eq!(alphabet.symbols().collect::<String>(), "0123456789ab");
    ///
    /// assert!(Alphabet::new(0).is_err());
    /// assert!(Alphabet::new(37).is_err());
    /// ```
    pub const fn new(size: usize) -> Result<Self, AlphabetError> {
        if size == 0 || size > MAX_SYMBOLS {
            return Err(AlphabetError::InvalidSize(size));
        }
        Ok(Self { size })
    }

    /// Number of symbols in the alphabet
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.size
    }

    /// Always false; an alphabet holds at least one symbol
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Symbol at `index`, or `None` past the end of the alphabet
    #[inline]
    #[must_use]
    pub fn symbol(self, index: usize) -> Option<char> {
        if index >= self.size {
            return None;
        }
        // index < 36, so the cast is lossless
        char::from_digit(index as u32, RADIX)
    }

    /// Position of `symbol` in the alphabet, if it belongs to it
    #[inline]
    #[must_use]
    pub fn index_of(self, symbol: char) -> Option<usize> {
        // to_digit also accepts uppercase letters; only lowercase are symbols
        if symbol.is_ascii_uppercase() {
            return None;
        }
        symbol
            .to_digit(RADIX)
            .map(|d| d as usize)
            .filter(|&d| d < self.size)
    }

    /// Check whether `symbol` is one of this alphabet's symbols
    #[inline]
    #[must_use]
    pub fn contains(self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Iterate over the symbols in order
    pub fn symbols(self) -> impl Iterator<Item = char> {
        (0..self.size).filter_map(move |i| self.symbol(i))
    }

    /// Last symbol of the alphabet
    #[must_use]
    pub fn last(self) -> char {
        // size is always within 1..=36
        self.symbol(self.size - 1).unwrap_or('0')
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes_in_range() {
        for size in 1..=MAX_SYMBOLS {
            let alphabet = Alphabet::new(size).unwrap();
            assert_eq!(alphabet.len(), size);
            assert_eq!(alphabet.symbols().count(), size);
        }
    }

    #[test]
    fn alphabet_sizes_out_of_range() {
        assert_eq!(Alphabet::new(0), Err(AlphabetError::InvalidSize(0)));
        assert_eq!(Alphabet::new(37), Err(AlphabetError::InvalidSize(37)));
    }

    #[test]
    fn digits_come_before_letters() {
        let alphabet = Alphabet::FULL;
        assert_eq!(
            alphabet.to_string(),
            "0123456789abcdefghijklmnopqrstuvwxyz"
        );
        assert_eq!(alphabet.symbol(9), Some('9'));
        assert_eq!(alphabet.symbol(10), Some('a'));
        assert_eq!(alphabet.symbol(35), Some('z'));
        assert_eq!(alphabet.symbol(36), None);
    }

    #[test]
    fn symbol_lookup_respects_size() {
        let alphabet = Alphabet::new(11).unwrap();
        assert_eq!(alphabet.index_of('a'), Some(10));
        assert_eq!(alphabet.index_of('b'), None);
        assert!(alphabet.contains('0'));
        assert!(!alphabet.contains('A'));
        assert!(!alphabet.contains('-'));
    }

    #[test]
    fn last_symbol() {
        assert_eq!(Alphabet::new(1).unwrap().last(), '0');
        assert_eq!(Alphabet::new(10).unwrap().last(), '9');
        assert_eq!(Alphabet::new(16).unwrap().last(), 'f');
        assert_eq!(Alphabet::FULL.last(), 'z');
    }
}
