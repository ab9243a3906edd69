//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types: the symbol alphabet,
//! secret codes, guesses, and the scoring rule. Everything here is pure and
//! free of I/O.

mod alphabet;
mod code;
mod score;

pub use alphabet::{Alphabet, AlphabetError, MAX_SYMBOLS};
pub use code::{CodeError, Guess, SecretCode};
pub use score::Score;
