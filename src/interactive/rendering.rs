//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message area for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, WORD_LEN};
use crate::game::{GameResult, SessionStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: SessionStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(5), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn feedback_style(feedback: LetterFeedback) -> Style {
    match feedback {
        LetterFeedback::Match => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Exists => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::NoMatch => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.controller.session();

    let mut lines = vec![Line::from("")];
    for row in 0..session.total_guesses() {
        let spans: Vec<Span> = if let Some(guess) = session.committed_guesses().get(row) {
            guess
                .letters()
                .iter()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", letter.value),
                            feedback_style(letter.feedback),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else if row == session.committed_guesses().len() && !session.result().is_terminal() {
            // The row being typed
            let typed = session.current_guess().letters();
            (0..WORD_LEN)
                .flat_map(|i| {
                    let cell = typed.get(i).map_or_else(
                        || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                        |c| {
                            Span::styled(
                                format!(" {c} "),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            )
                        },
                    );
                    [cell, Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_LEN)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Best feedback seen so far for each guessed letter
fn letter_statuses<S: SessionStore>(app: &App<S>) -> FxHashMap<char, LetterFeedback> {
    let mut statuses = FxHashMap::default();
    for guess in app.controller.session().committed_guesses() {
        for letter in guess.letters() {
            let entry = statuses.entry(letter.value).or_insert(letter.feedback);
            if letter.feedback > *entry {
                *entry = letter.feedback;
            }
        }
    }
    statuses
}

fn render_keyboard<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let statuses = letter_statuses(app);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let style = statuses
                        .get(&c)
                        .map_or_else(Style::default, |&feedback| feedback_style(feedback));
                    [Span::styled(format!(" {c} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(message.text.clone(), style))
        })
        .collect();

    let messages = Paragraph::new(lines).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(messages, area);
}

fn render_status<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.controller.session();

    let state = match session.result() {
        GameResult::Unfinished if app.controller.is_input_locked() => {
            Span::styled("Revealing…", Style::default().fg(Color::Cyan))
        }
        GameResult::Unfinished => Span::styled("In progress", Style::default().fg(Color::Green)),
        GameResult::Win => Span::styled(
            "Won",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        GameResult::Loss => Span::styled(
            "Lost",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let line = Line::from(vec![
        Span::raw(format!(
            "Guesses: {}/{}   ",
            session.committed_guesses().len(),
            session.total_guesses()
        )),
        state,
        Span::raw("   Ctrl-N new game · Esc quit"),
    ]);

    let status = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}
