//! Simple interactive CLI mode
//!
//! Text-based game without TUI: prompt for the setup, then grade guesses
//! until the secret code is found. Prompts and grades go to the output
//! writer, rejected answers to the error writer.

use crate::config::GameConfig;
use crate::core::SecretCode;
use crate::input::TokenReader;
use crate::output::{congratulation_message, grade_message, symbol_message};
use crate::session::GameSession;
use crate::validation::{
    GameSetup, ValidationError, validate_number_of_symbols, validate_password_length,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::info;

/// How a console game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleOutcome {
    /// The player found the code
    Solved { secret: SecretCode, turns: usize },
    /// Input ran out before the code was found
    InputClosed,
}

/// Console front end over any reader and pair of writers
pub struct ConsoleGame<'a, R, W, E> {
    config: &'a GameConfig,
    input: TokenReader<R>,
    output: W,
    errors: E,
}

impl<'a, R: BufRead, W: Write, E: Write> ConsoleGame<'a, R, W, E> {
    pub fn new(config: &'a GameConfig, input: R, output: W, errors: E) -> Self {
        Self {
            config,
            input: TokenReader::new(input),
            output,
            errors,
        }
    }

    /// Play one game with a freshly generated secret
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure while prompting or reading.
    pub fn play(&mut self) -> Result<SimpleOutcome> {
        let Some(setup) = self.prompt_setup()? else {
            return Ok(SimpleOutcome::InputClosed);
        };
        let session = GameSession::start(setup).context("failed to generate secret code")?;
        self.play_session(session)
    }

    /// Play one game against a known secret
    ///
    /// # Errors
    ///
    /// Returns an error if the secret's length is outside the configured
    /// bounds, or on I/O failure.
    pub fn play_with_secret(&mut self, secret: SecretCode) -> Result<SimpleOutcome> {
        let length = i64::try_from(secret.len()).unwrap_or(i64::MAX);
        validate_password_length(length, self.config)?;
        let alphabet = secret.minimal_alphabet();
        self.play_session(GameSession::with_secret(secret, alphabet))
    }

    fn prompt_setup(&mut self) -> Result<Option<GameSetup>> {
        let length = loop {
            writeln!(self.output, "Enter the length of the password:")?;
            let Some(raw) = self.read_integer()? else {
                return Ok(None);
            };
            match validate_password_length(raw, self.config) {
                Ok(length) => break length,
                Err(err) => self.report(&err)?,
            }
        };

        let alphabet = loop {
            writeln!(self.output, "Input the number of possible symbols in the code:")?;
            let Some(raw) = self.read_integer()? else {
                return Ok(None);
            };
            match validate_number_of_symbols(raw, length) {
                Ok(alphabet) => break alphabet,
                Err(err) => self.report(&err)?,
            }
        };

        Ok(Some(GameSetup { length, alphabet }))
    }

    fn play_session(&mut self, mut session: GameSession) -> Result<SimpleOutcome> {
        writeln!(
            self.output,
            "{}",
            symbol_message(session.code_length(), session.alphabet()).cyan()
        )?;
        writeln!(self.output, "Okay, let's start the game!")?;

        while !session.is_solved() {
            writeln!(self.output, "Turn {}:", session.next_turn())?;
            writeln!(self.output, "Enter your guess:")?;

            let Some(guess) = self.input.next_token()? else {
                info!(turns = session.turns().len(), "Input closed mid-game");
                writeln!(self.output, "\n👋 Input closed. The secret code was kept.")?;
                return Ok(SimpleOutcome::InputClosed);
            };

            let score = session.submit(&guess);
            writeln!(self.output, "{}", grade_message(score))?;
        }

        writeln!(
            self.output,
            "{}",
            congratulation_message(session.secret()).bright_green().bold()
        )?;
        self.output.flush()?;

        Ok(SimpleOutcome::Solved {
            secret: session.secret().clone(),
            turns: session.turns().len(),
        })
    }

    /// Read tokens until one parses as an integer
    fn read_integer(&mut self) -> Result<Option<i64>> {
        self.output.flush()?;
        while let Some(token) = self.input.next_token()? {
            if let Ok(value) = token.parse::<i64>() {
                return Ok(Some(value));
            }
            writeln!(
                self.errors,
                "{}",
                "Error: Invalid input. Please enter a valid integer.".red()
            )?;
        }
        Ok(None)
    }

    fn report(&mut self, err: &ValidationError) -> Result<()> {
        writeln!(self.errors, "{}", format!("Error: {err}").red())?;
        self.errors.flush()?;
        Ok(())
    }
}

/// Run the simple interactive CLI mode on stdin/stdout, errors on stderr
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// prompts, or if a fixed `secret` is outside the configured length bounds.
pub fn run_simple(config: &GameConfig, secret: Option<SecretCode>) -> Result<SimpleOutcome> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut game = ConsoleGame::new(config, stdin.lock(), stdout.lock(), stderr.lock());

    match secret {
        Some(secret) => game.play_with_secret(secret),
        None => game.play(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Game result plus what was written to the output and error streams
    struct Transcript {
        outcome: SimpleOutcome,
        output: String,
        errors: String,
    }

    fn run(
        config: &GameConfig,
        input: impl Into<Vec<u8>>,
        secret: Option<&str>,
    ) -> Result<Transcript> {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let outcome = {
            let mut game =
                ConsoleGame::new(config, Cursor::new(input.into()), &mut output, &mut errors);
            match secret {
                Some(secret) => game.play_with_secret(SecretCode::parse(secret).unwrap())?,
                None => game.play()?,
            }
        };
        Ok(Transcript {
            outcome,
            output: String::from_utf8(output).unwrap(),
            errors: String::from_utf8(errors).unwrap(),
        })
    }

    fn play(config: &GameConfig, input: &str) -> Transcript {
        run(config, input, None).unwrap()
    }

    fn play_secret(secret: &str, input: &str) -> Transcript {
        run(&GameConfig::default(), input, Some(secret)).unwrap()
    }

    #[test]
    fn known_secret_game_transcript() {
        let game = play_secret("123", "456 321 1 123\n");

        assert_eq!(
            game.outcome,
            SimpleOutcome::Solved {
                secret: SecretCode::parse("123").unwrap(),
                turns: 4
            }
        );
        let output = game.output;
        assert!(output.contains("The secret code is prepared: *** (0-3)."));
        assert!(output.contains("Okay, let's start the game!"));
        assert!(output.contains("Turn 1:"));
        assert!(output.contains("Grade: None."));
        assert!(output.contains("Grade: 1 bull(s) and 2 cow(s)."));
        assert!(output.contains("Grade: 1 bull(s)"));
        assert!(output.contains("Grade: 3 bull(s)"));
        assert!(output.contains("Turn 4:"));
        assert!(!output.contains("Turn 5:"));
        assert!(output.contains("Congratulations! You guessed the secret code: 123"));
        assert!(game.errors.is_empty());
    }

    #[test]
    fn cows_only_grade() {
        let game = play_secret("12", "21 12");
        assert!(game.output.contains("Grade: 2 cow(s)"));
    }

    #[test]
    fn input_closed_mid_game() {
        let game = play_secret("123", "456\n");
        assert_eq!(game.outcome, SimpleOutcome::InputClosed);
        assert!(!game.output.contains("Congratulations"));
    }

    #[test]
    fn secret_outside_configured_bounds_is_refused() {
        let config = GameConfig::new(1, 2).unwrap();
        assert!(run(&config, "", Some("123")).is_err());
    }

    #[test]
    fn setup_reprompts_on_bad_input() {
        // Not a number, then out of range length, then too few and too many symbols
        let input = "four 0 1 0 37 1\n";
        let config = GameConfig::default();
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let setup = {
            let mut game = ConsoleGame::new(
                &config,
                Cursor::new(input.to_string()),
                &mut output,
                &mut errors,
            );
            game.prompt_setup().unwrap().unwrap()
        };

        assert_eq!(setup.length, 1);
        assert_eq!(setup.alphabet.len(), 1);

        let output = String::from_utf8(output).unwrap();
        let errors = String::from_utf8(errors).unwrap();
        assert!(errors.contains("Error: Invalid input. Please enter a valid integer."));
        assert!(errors.contains("Error: Invalid password length: 0. Must be between 1 and 36."));
        assert!(errors.contains("Number of symbols cannot be less than the password length."));
        assert!(errors.contains("Number of symbols cannot be greater than 36."));
        assert_eq!(errors.lines().count(), 4);

        assert!(!output.contains("Error:"));
        assert_eq!(output.matches("Enter the length of the password:").count(), 2);
        assert_eq!(
            output
                .matches("Input the number of possible symbols in the code:")
                .count(),
            3
        );
    }

    #[test]
    fn single_symbol_game_end_to_end() {
        // Length 1 over a 1-symbol alphabet: the only code is "0"
        let game = play(&GameConfig::default(), "1 1 0\n");
        assert_eq!(
            game.outcome,
            SimpleOutcome::Solved {
                secret: SecretCode::parse("0").unwrap(),
                turns: 1
            }
        );
        assert!(game.output.contains("The secret code is prepared: * (0)."));
        assert!(game.output.contains("Congratulations! You guessed the secret code: 0"));
    }

    #[test]
    fn full_permutation_game_is_found_by_elimination() {
        // Length 2 over 2 symbols: the code is "01" or "10"
        let game = play(&GameConfig::default(), "2 2 01 10\n");
        assert!(matches!(game.outcome, SimpleOutcome::Solved { turns, .. } if turns <= 2));
    }

    #[test]
    fn input_closed_during_setup() {
        let game = play(&GameConfig::default(), "4\n");
        assert_eq!(game.outcome, SimpleOutcome::InputClosed);
        assert!(game.output.contains("Input the number of possible symbols in the code:"));
    }

    #[test]
    fn configured_bounds_apply_to_prompt() {
        let config = GameConfig::new(3, 5).unwrap();
        let game = play(&config, "2 6\n");
        assert!(game.errors.contains("Invalid password length: 2. Must be between 3 and 5."));
        assert!(game.errors.contains("Invalid password length: 6. Must be between 3 and 5."));
    }

    #[test]
    fn invalid_utf8_during_setup_is_reprompted() {
        let game = run(&GameConfig::default(), b"\xff\xfe\n1 1 0\n".to_vec(), None).unwrap();
        assert_eq!(
            game.outcome,
            SimpleOutcome::Solved {
                secret: SecretCode::parse("0").unwrap(),
                turns: 1
            }
        );
        assert!(game.errors.contains("Please enter a valid integer."));
    }

    #[test]
    fn invalid_utf8_guess_is_scored() {
        let game = run(&GameConfig::default(), b"\xc3\x28\n123\n".to_vec(), Some("123")).unwrap();
        assert_eq!(
            game.outcome,
            SimpleOutcome::Solved {
                secret: SecretCode::parse("123").unwrap(),
                turns: 2
            }
        );
        assert!(game.output.contains("Grade: None."));
    }
}
