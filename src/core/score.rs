//! Bulls and cows scoring
//!
//! A score is the feedback for one guess:
//! - bulls = symbols matching the secret in both value and position
//! - cows  = symbols matching a secret symbol at a different position
//!
//! Cows are counted per (secret position, guess position) pair, so repeated
//! symbols in a guess each earn their own cow. This means `bulls + cows` can
//! exceed the code length for guesses with duplicates.

use super::{Guess, SecretCode};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    bulls: usize,
    cows: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> usize {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> usize {
        self.cows
    }

    /// Check if this score means the whole code was found
    #[inline]
    #[must_use]
    pub const fn is_win(self, code_length: usize) -> bool {
        self.bulls == code_length
    }

    /// Calculate the score of `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Bulls: walk the secret; position `i` counts when the guess is long
    ///    enough and holds the same symbol there
    /// 2. Cows: every pair `(i, j)` with `i != j` and `secret[i] == guess[j]`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Guess, Score, SecretCode};
    ///
    /// let secret = SecretCode::parse("123").unwrap();
    /// let score = Score::calculate(&secret, &Guess::new("321"));
    ///
    /// assert_eq!(score.bulls(), 1);
    /// assert_eq!(score.cows(), 2);
    /// ```
    #[must_use]
    pub fn calculate(secret: &SecretCode, guess: &Guess) -> Self {
        let secret = secret.symbols();
        let guess = guess.symbols();

        let bulls = secret
            .iter()
            .zip(guess)
            .filter(|(s, g)| s == g)
            .count();

        let cows = secret
            .iter()
            .enumerate()
            .map(|(i, s)| {
                guess
                    .iter()
                    .enumerate()
                    .filter(|&(j, g)| i != j && g == s)
                    .count()
            })
            .sum();

        Self { bulls, cows }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}C", self.bulls, self.cows)
    }
}
