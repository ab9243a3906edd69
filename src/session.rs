//! A single game: one secret code and the turns played against it

use crate::core::{Alphabet, Guess, Score, SecretCode};
use crate::generator::{GenerateError, generate};
use crate::validation::GameSetup;
use tracing::{debug, info};

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub number: usize,
    pub guess: String,
    pub score: Score,
}

/// Game state for one secret code
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretCode,
    alphabet: Alphabet,
    turns: Vec<Turn>,
    solved: bool,
}

impl GameSession {
    /// Start a game with a freshly generated secret
    ///
    /// # Errors
    /// Returns `GenerateError` if the setup cannot produce a code; a
    /// validated `GameSetup` never does.
    pub fn start(setup: GameSetup) -> Result<Self, GenerateError> {
        let secret = generate(setup.length, setup.alphabet)?;
        info!(
            length = setup.length,
            symbols = setup.alphabet.len(),
            "New game started"
        );
        Ok(Self::with_secret(secret, setup.alphabet))
    }

    /// Start a game against a known secret drawn from `alphabet`
    #[must_use]
    pub fn with_secret(secret: SecretCode, alphabet: Alphabet) -> Self {
        Self {
            secret,
            alphabet,
            turns: Vec::new(),
            solved: false,
        }
    }

    /// Score a guess and record the turn
    pub fn submit(&mut self, guess: &str) -> Score {
        let score = Score::calculate(&self.secret, &Guess::new(guess));
        let number = self.turns.len() + 1;
        debug!(turn = number, %score, "Guess scored");

        self.turns.push(Turn {
            number,
            guess: guess.to_string(),
            score,
        });

        if score.is_win(self.secret.len()) {
            self.solved = true;
            info!(turns = number, "Secret code found");
        }

        score
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }

    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of the turn about to be played
    #[must_use]
    pub fn next_turn(&self) -> usize {
        self.turns.len() + 1
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn four_of_ten_game_ends_on_exact_guess() {
        let setup = GameSetup::new(4, 10, &GameConfig::default()).unwrap();
        let mut session = GameSession::start(setup).unwrap();

        assert_eq!(session.code_length(), 4);
        assert_eq!(session.alphabet().len(), 10);
        assert!(!session.is_solved());

        let secret = session.secret().to_string();
        let score = session.submit(&secret);

        assert_eq!(score, Score::new(4, 0));
        assert!(session.is_solved());
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn turns_are_numbered_and_recorded() {
        let secret = SecretCode::parse("123").unwrap();
        let mut session = GameSession::with_secret(secret, Alphabet::new(10).unwrap());

        assert_eq!(session.next_turn(), 1);
        assert_eq!(session.submit("321"), Score::new(1, 2));
        assert_eq!(session.submit("1"), Score::new(1, 0));
        assert!(!session.is_solved());
        assert_eq!(session.submit("123"), Score::new(3, 0));
        assert!(session.is_solved());

        let numbers: Vec<usize> = session.turns().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(session.turns()[0].guess, "321");
        assert_eq!(session.next_turn(), 4);
    }

    #[test]
    fn longer_guess_with_all_bulls_wins() {
        // Bulls only look at the secret's positions
        let mut session = GameSession::with_secret(SecretCode::parse("12").unwrap(), Alphabet::new(3).unwrap());
        let score = session.submit("120");
        assert_eq!(score.bulls(), 2);
        assert!(session.is_solved());
    }
}
