//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::Alphabet;
use crate::output::formatters::{grade_message, symbol_message};
use crate::session::GameSession;
use crate::validation::{GameSetup, validate_number_of_symbols, validate_password_length};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub pending_length: Option<usize>,
    pub session: Option<GameSession>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    CodeLength,
    SymbolCount,
    Guess,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_turns: usize,
    pub best_turns: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_turns(&self) -> Option<f64> {
        (self.games_won > 0).then(|| self.total_turns as f64 / self.games_won as f64)
    }

    fn record_win(&mut self, turns: usize) {
        self.games_won += 1;
        self.total_turns += turns;
        self.best_turns = Some(self.best_turns.map_or(turns, |best| best.min(turns)));
    }
}

const MAX_MESSAGES: usize = 8;

impl<'a> App<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            input_mode: InputMode::CodeLength,
            input_buffer: String::new(),
            pending_length: None,
            session: None,
            messages: vec![Message {
                text: "Welcome! Guess the secret code of distinct symbols.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Handle Enter in whichever input mode is active
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let input = input.trim();

        match self.input_mode {
            InputMode::CodeLength => self.handle_code_length(input),
            InputMode::SymbolCount => self.handle_symbol_count(input),
            InputMode::Guess => self.handle_guess(input),
            InputMode::WinCelebration => {}
        }
    }

    fn handle_code_length(&mut self, input: &str) {
        let Some(raw) = self.parse_integer(input) else {
            return;
        };
        match validate_password_length(raw, self.config) {
            Ok(length) => {
                self.pending_length = Some(length);
                self.input_mode = InputMode::SymbolCount;
            }
            Err(err) => self.add_message(&format!("Error: {err}"), MessageStyle::Error),
        }
    }

    fn handle_symbol_count(&mut self, input: &str) {
        let Some(length) = self.pending_length else {
            self.input_mode = InputMode::CodeLength;
            return;
        };
        let Some(raw) = self.parse_integer(input) else {
            return;
        };
        let alphabet = match validate_number_of_symbols(raw, length) {
            Ok(alphabet) => alphabet,
            Err(err) => {
                self.add_message(&format!("Error: {err}"), MessageStyle::Error);
                return;
            }
        };

        let setup = GameSetup { length, alphabet };
        match GameSession::start(setup) {
            Ok(session) => {
                self.add_message(
                    &symbol_message(setup.length, setup.alphabet),
                    MessageStyle::Info,
                );
                self.add_message("Okay, let's start the game!", MessageStyle::Info);
                self.session = Some(session);
                self.input_mode = InputMode::Guess;
            }
            Err(err) => {
                error!(error = %err, "Secret generation failed");
                self.add_message(&format!("Error: {err}"), MessageStyle::Error);
                self.input_mode = InputMode::CodeLength;
            }
        }
        self.pending_length = None;
    }

    fn handle_guess(&mut self, input: &str) {
        if input.is_empty() {
            return;
        }
        // Only the first token counts, like the console game
        let guess = input.split_whitespace().next().unwrap_or_default();

        let Some(session) = self.session.as_mut() else {
            self.input_mode = InputMode::CodeLength;
            return;
        };

        let score = session.submit(guess);
        let turn = session.turns().len();
        let solved = session.is_solved();
        let secret = session.secret().to_string();

        self.add_message(
            &format!("Turn {turn}: {guess} → {}", grade_message(score)),
            MessageStyle::Info,
        );

        if solved {
            self.stats.record_win(turn);
            self.input_mode = InputMode::WinCelebration;

            let celebration = match turn {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2..=4 => "🔥 MAGNIFICENT! 🔥",
                5..=8 => "✨ SPLENDID! ✨",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message(
                &format!("Congratulations! You guessed the secret code: {secret}"),
                MessageStyle::Success,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    fn parse_integer(&mut self, input: &str) -> Option<i64> {
        if let Ok(value) = input.parse::<i64>() {
            Some(value)
        } else {
            self.add_message(
                "Error: Invalid input. Please enter a valid integer.",
                MessageStyle::Error,
            );
            None
        }
    }

    pub fn new_game(&mut self) {
        self.session = None;
        self.pending_length = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::CodeLength;
        self.add_message("New game started! Choose a code length.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Alphabet of the game in progress
    #[must_use]
    pub fn alphabet(&self) -> Option<Alphabet> {
        self.session
            .as_ref()
            .map(GameSession::alphabet)
    }

    /// Route a key press to the state machine
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                // In celebration mode, ignore other keys
                _ => {}
            },
            InputMode::CodeLength | InputMode::SymbolCount | InputMode::Guess => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, mode = ?app.input_mode, "Key pressed");
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    fn last_message<'b>(app: &'b App<'_>) -> &'b str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn setup_then_win() {
        let config = GameConfig::default();
        let mut app = App::new(&config);
        assert_eq!(app.input_mode, InputMode::CodeLength);

        type_line(&mut app, "4");
        assert_eq!(app.input_mode, InputMode::SymbolCount);
        type_line(&mut app, "10");
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.alphabet().unwrap().len(), 10);

        let secret = app.session.as_ref().unwrap().secret().to_string();
        type_line(&mut app, &secret);

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.best_turns, Some(1));
        let turn_line = format!("Turn 1: {secret} → Grade: 4 bull(s)");
        assert!(app.messages.iter().any(|m| m.text == turn_line));
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("You guessed the secret code"))
        );
    }

    #[test]
    fn invalid_setup_input_stays_in_mode() {
        let config = GameConfig::default();
        let mut app = App::new(&config);

        type_line(&mut app, "abc");
        assert_eq!(app.input_mode, InputMode::CodeLength);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(last_message(&app).contains("valid integer"));

        type_line(&mut app, "0");
        assert_eq!(app.input_mode, InputMode::CodeLength);
        assert!(last_message(&app).contains("Invalid password length: 0"));

        type_line(&mut app, "5");
        type_line(&mut app, "4");
        assert_eq!(app.input_mode, InputMode::SymbolCount);
        assert!(last_message(&app).contains("less than the password length"));

        type_line(&mut app, "40");
        assert!(last_message(&app).contains("greater than 36"));
        assert!(app.session.is_none());
    }

    #[test]
    fn wrong_guess_reports_grade() {
        let config = GameConfig::default();
        let mut app = App::new(&config);
        type_line(&mut app, "2");
        type_line(&mut app, "2");

        // With two symbols the code is "01" or "10"; "00" always scores one bull
        type_line(&mut app, "00");
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(last_message(&app).contains("Turn 1: 00 → Grade: 1 bull(s) and 1 cow(s)."));
    }

    #[test]
    fn new_game_after_win() {
        let config = GameConfig::default();
        let mut app = App::new(&config);
        type_line(&mut app, "1");
        type_line(&mut app, "1");
        type_line(&mut app, "0");
        assert_eq!(app.input_mode, InputMode::WinCelebration);

        // Typing is ignored while celebrating
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::CodeLength);
        assert!(app.session.is_none());
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn backspace_and_quit_keys() {
        let config = GameConfig::default();
        let mut app = App::new(&config);

        app.handle_key(KeyCode::Char('4'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "4");

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn statistics_average() {
        let mut stats = Statistics::default();
        assert_eq!(stats.average_turns(), None);
        stats.record_win(3);
        stats.record_win(5);
        assert_eq!(stats.best_turns, Some(3));
        assert_eq!(stats.average_turns(), Some(4.0));
    }
}
