//! Game controller
//!
//! The single writer of the Session. Gates which inputs are legal at each
//! point in the game, scores commits, persists history through the store and
//! queues notifications for the presentation layer to drain.

use super::session::{DEFAULT_TOTAL_GUESSES, GameResult, Session};
use super::store::SessionStore;
use crate::core::{CommittedGuess, Word, normalize_input, score};

/// Placeholder guess treated as always-rejected
///
/// Stands in for dictionary lookup: submitting it exercises the
/// invalid-guess path without a real word list.
pub const REJECTED_WORD: &str = "XXXXX";

/// Discrete user-facing events emitted by the controller
///
/// A notification carries no payload; the kind is the whole message. Silent
/// no-ops (a key that had no effect) emit nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Commit attempted with fewer than 5 letters
    TooShort,
    /// Commit attempted with the rejected placeholder word
    InvalidGuess,
    /// The last commit spelled the solution
    Win,
    /// The guess budget is spent without a win
    Loss,
}

/// Owns the session and enforces the rules of play
pub struct GameController<S: SessionStore> {
    session: Session,
    store: S,
    notifications: Vec<Notification>,
    input_locked: bool,
}

impl<S: SessionStore> GameController<S> {
    /// Build a controller, replaying any history the store has persisted
    ///
    /// A history that already satisfies win or loss puts the session in that
    /// terminal state immediately.
    pub fn new(solution: Word, store: S) -> Self {
        Self::with_total_guesses(solution, store, DEFAULT_TOTAL_GUESSES)
    }

    pub fn with_total_guesses(solution: Word, mut store: S, total_guesses: usize) -> Self {
        let history = store.load();
        let session = Session::resume(solution, total_guesses, history);

        Self {
            session,
            store,
            notifications: Vec::new(),
            input_locked: false,
        }
    }

    /// Append a typed character to the current guess
    ///
    /// Characters outside the input alphabet, a full current guess, a spent
    /// guess budget, a finished game and a held input lock are all silent
    /// no-ops: the key simply has no effect.
    pub fn input_letter(&mut self, c: char) {
        if self.input_locked || !self.accepting_guesses() {
            return;
        }
        if let Some(letter) = normalize_input(c) {
            self.session.current_mut().push(letter);
        }
    }

    /// Remove the last character of the current guess
    ///
    /// Unlike input, deletion is not gated by the game result or the guess
    /// count; only the input lock suppresses it. No-op when empty.
    pub fn delete_letter(&mut self) {
        if self.input_locked {
            return;
        }
        self.session.current_mut().pop();
    }

    /// Commit the current guess
    ///
    /// Emits `TooShort` below 5 letters and `InvalidGuess` for the rejected
    /// placeholder word, leaving all state unchanged in both cases. A real
    /// commit scores the guess, appends it, clears the current guess, saves
    /// the history and emits `Win` or `Loss` when a terminal state is
    /// reached.
    pub fn enter_guess(&mut self) {
        if self.input_locked || !self.accepting_guesses() {
            return;
        }

        let Some(word) = self.session.current_guess().to_word() else {
            self.notify(Notification::TooShort);
            return;
        };

        if word.text() == REJECTED_WORD {
            self.notify(Notification::InvalidGuess);
            return;
        }

        let scored = score(&word, self.session.solution());
        self.session.commit(CommittedGuess::new(scored));
        self.store.save(self.session.committed_guesses());

        match self.session.result() {
            GameResult::Win => self.notify(Notification::Win),
            GameResult::Loss => self.notify(Notification::Loss),
            GameResult::Unfinished => {}
        }
    }

    fn accepting_guesses(&self) -> bool {
        !self.session.result().is_terminal()
            && self.session.committed_guesses().len() < self.session.total_guesses()
    }

    /// Hold the input lock
    ///
    /// Set by the presentation layer while a committed row's feedback is
    /// being revealed; the controller only consults it.
    pub fn lock_input(&mut self) {
        self.input_locked = true;
    }

    /// Release the input lock
    pub fn unlock_input(&mut self) {
        self.input_locked = false;
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Read access to the session for rendering
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drain queued notifications in emission order
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Explicit external reset: clear persisted history and start over
    ///
    /// The session never initiates this itself; it is wired to an adapter
    /// action (Ctrl-N in the TUI, 'new' in the CLI).
    pub fn reset(&mut self) {
        self.store.clear();
        self.session = Session::new(self.session.solution().clone(), self.session.total_guesses());
        self.notifications.clear();
        self.input_locked = false;
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
