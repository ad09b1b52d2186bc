//! TUI application state and event loop

use crate::game::{GameController, GameResult, Notification, SessionStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Event-loop ticks the reveal lock is held after a commit
const REVEAL_TICKS: u8 = 6;

/// Poll interval driving reveal ticks
const TICK_RATE: Duration = Duration::from_millis(80);

/// Application state
///
/// Wraps the game controller for terminal play and owns the reveal-animation
/// timing: the controller exposes the input lock, the app decides when the
/// reveal starts and ends.
pub struct App<S: SessionStore> {
    pub controller: GameController<S>,
    pub messages: Vec<Message>,
    pub reveal_ticks: u8,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: SessionStore> App<S> {
    #[must_use]
    pub fn new(controller: GameController<S>) -> Self {
        let mut app = Self {
            controller,
            messages: Vec::new(),
            reveal_ticks: 0,
            should_quit: false,
        };

        match app.controller.session().result() {
            GameResult::Win => app.add_message(
                "Session restored - already solved. Ctrl-N starts over.",
                MessageStyle::Success,
            ),
            GameResult::Loss => app.add_message(
                "Session restored - out of guesses. Ctrl-N starts over.",
                MessageStyle::Error,
            ),
            GameResult::Unfinished => app.add_message(
                "Type a word and press Enter. Ctrl-N resets, Esc quits.",
                MessageStyle::Info,
            ),
        }

        app
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.reset();
                self.messages.clear();
                self.reveal_ticks = 0;
                self.add_message("Board cleared.", MessageStyle::Info);
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.controller.delete_letter();
            }
            KeyCode::Char(c) => {
                self.controller.input_letter(c);
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        let before = self.controller.session().committed_guesses().len();
        self.controller.enter_guess();
        let committed = self.controller.session().committed_guesses().len() > before;

        for notification in self.controller.take_notifications() {
            match notification {
                Notification::TooShort => {
                    self.add_message("Not enough letters!", MessageStyle::Error);
                }
                Notification::InvalidGuess => {
                    self.add_message("Not a valid word!", MessageStyle::Error);
                }
                Notification::Win => {
                    self.add_message("Splendid! You got it.", MessageStyle::Success);
                }
                Notification::Loss => {
                    let text = format!(
                        "Out of guesses - the word was {}.",
                        self.controller.session().solution().text()
                    );
                    self.add_message(&text, MessageStyle::Error);
                }
            }
        }

        if committed {
            // Hold input while the new row's feedback is revealed
            self.controller.lock_input();
            self.reveal_ticks = REVEAL_TICKS;
        }
    }

    /// Advance the reveal animation one tick, releasing the lock at the end
    pub fn on_tick(&mut self) {
        if self.reveal_ticks > 0 {
            self.reveal_ticks -= 1;
            if self.reveal_ticks == 0 {
                self.controller.unlock_input();
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 3 messages
        if self.messages.len() > 3 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key.code, key.modifiers);
            }
        } else {
            app.on_tick();
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
    use crate::core::Word;
    use crate::game::MemoryStore;

    fn app() -> App<MemoryStore> {
        let controller = GameController::new(Word::new("uscle").unwrap(), MemoryStore::new());
        App::new(controller)
    }

    fn type_word(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_backspace_edit_the_current_guess() {
        let mut app = app();
        type_word(&mut app, "spe");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);

        assert_eq!(app.controller.session().current_guess().letters(), &['S', 'P']);
    }

    #[test]
    fn commit_holds_the_reveal_lock_until_ticks_expire() {
        let mut app = app();
        type_word(&mut app, "speed");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.controller.is_input_locked());

        // Keys have no effect while the reveal is running
        type_word(&mut app, "robot");
        assert!(app.controller.session().current_guess().is_empty());

        for _ in 0..REVEAL_TICKS {
            app.on_tick();
        }

        assert!(!app.controller.is_input_locked());
        type_word(&mut app, "ro");
        assert_eq!(app.controller.session().current_guess().len(), 2);
    }

    #[test]
    fn too_short_submit_does_not_start_a_reveal() {
        let mut app = app();
        type_word(&mut app, "spe");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(!app.controller.is_input_locked());
        assert_eq!(app.reveal_ticks, 0);
    }

    #[test]
    fn ctrl_n_resets_the_board() {
        let mut app = app();
        type_word(&mut app, "speed");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);

        assert!(app.controller.session().committed_guesses().is_empty());
        assert!(!app.controller.is_input_locked());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }
}
