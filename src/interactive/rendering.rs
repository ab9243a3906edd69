//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::symbol_range;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Game panel
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS AND COWS 🐄")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Current game
            Constraint::Min(3),    // History
        ])
        .split(area);

    render_current_game(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_current_game(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.session, app.alphabet()) {
        (Some(session), Some(alphabet)) => {
            let code = if session.is_solved() {
                session.secret().to_string()
            } else {
                "*".repeat(session.code_length())
            };
            vec![
                Line::from(vec![
                    Span::raw("Secret:  "),
                    Span::styled(
                        code,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!("Length:  {}", session.code_length())),
                Line::from(format!(
                    "Symbols: {} ({})",
                    alphabet.len(),
                    symbol_range(alphabet)
                )),
                Line::from(format!("Turn:    {}", session.next_turn())),
            ]
        }
        _ => {
            let mut lines = vec![Line::from("Setting up a new game...")];
            if let Some(length) = app.pending_length {
                lines.push(Line::from(format!("Length:  {length}")));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2));

    let history_items: Vec<ListItem> = app
        .session
        .iter()
        .flat_map(|session| session.turns().iter().rev().take(visible))
        .map(|turn| {
            let bulls = "●".repeat(turn.score.bulls());
            let cows = "○".repeat(turn.score.cows());
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", turn.number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<12}", turn.guess),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>2}B ", turn.score.bulls()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{:>2}C ", turn.score.cows()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(bulls, Style::default().fg(Color::Green)),
                Span::styled(cows, Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::CodeLength => (
            " Enter the length of the password | ESC to quit ",
            Color::Cyan,
        ),
        InputMode::SymbolCount => (
            " Input the number of possible symbols in the code | ESC to quit ",
            Color::Cyan,
        ),
        InputMode::Guess => (" Enter your guess | ESC to quit ", Color::Yellow),
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
    };

    let content = if app.input_mode == InputMode::WinCelebration {
        ""
    } else {
        app.input_buffer.as_str()
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let won = Paragraph::new(format!("Games won: {}", app.stats.games_won))
        .alignment(Alignment::Center);
    f.render_widget(won, chunks[0]);

    let average = app
        .stats
        .average_turns()
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));
    let best = app
        .stats
        .best_turns
        .map_or_else(|| "-".to_string(), |best| best.to_string());
    let turns = Paragraph::new(format!("Avg turns: {average} | Best: {best}"))
        .alignment(Alignment::Center);
    f.render_widget(turns, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Backspace: Delete | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
