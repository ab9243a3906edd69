//! Bulls and Cows
//!
//! A code-guessing game: find a secret code of distinct base-36 symbols,
//! guided by how many symbols are in the right place (bulls) and how many
//! are in the code but misplaced (cows).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Alphabet, Guess, Score};
//! use bulls_cows::generator::generate;
//!
//! // Four distinct digits
//! let secret = generate(4, Alphabet::new(10).unwrap()).unwrap();
//!
//! // Score a guess
//! let score = Score::calculate(&secret, &Guess::new("0123"));
//! println!("{} bulls, {} cows", score.bulls(), score.cows());
//! ```

// Core domain types
pub mod core;

// Secret code generation
pub mod generator;

// Setup validation
pub mod validation;

// Configuration file handling
pub mod config;

// Game state
pub mod session;

// Console token input
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
