//! Game session state
//!
//! The Session owns everything a play-through accumulates: the solution, the
//! committed guesses, the guess being typed and the derived result. It is an
//! explicitly constructed value owned by the controller; there is no
//! process-wide game state.

use crate::core::{CommittedGuess, CurrentGuess, Word};

/// Default number of allowed guesses
pub const DEFAULT_TOTAL_GUESSES: usize = 6;

/// Outcome of a session
///
/// `Unfinished` is the initial state; `Win` and `Loss` are terminal and no
/// transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Unfinished,
    Win,
    Loss,
}

impl GameResult {
    /// Whether the game is over (no further guesses accepted)
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Unfinished)
    }
}

/// State of a single play-through
#[derive(Debug, Clone)]
pub struct Session {
    solution: Word,
    total_guesses: usize,
    committed: Vec<CommittedGuess>,
    current: CurrentGuess,
    result: GameResult,
}

impl Session {
    #[must_use]
    pub fn new(solution: Word, total_guesses: usize) -> Self {
        Self {
            solution,
            total_guesses,
            committed: Vec::with_capacity(total_guesses),
            current: CurrentGuess::new(),
            result: GameResult::Unfinished,
        }
    }

    /// Rebuild a session from persisted history
    ///
    /// Each stored guess flows through the same commit path as a live one, so
    /// a history that already won or lost lands in that terminal state right
    /// away. Entries past the first terminal state or the guess budget are
    /// dropped.
    #[must_use]
    pub fn resume(solution: Word, total_guesses: usize, history: Vec<CommittedGuess>) -> Self {
        let mut session = Self::new(solution, total_guesses);
        for guess in history {
            if !session.has_room() {
                break;
            }
            session.commit(guess);
        }
        session
    }

    fn has_room(&self) -> bool {
        !self.result.is_terminal() && self.committed.len() < self.total_guesses
    }

    /// Append a scored guess, clear the current guess and re-derive the result
    pub(crate) fn commit(&mut self, guess: CommittedGuess) {
        self.committed.push(guess);
        self.current.clear();
        self.result = self.derive_result();
    }

    /// Win iff the most recent commit spells the solution; otherwise loss
    /// once the budget is spent
    fn derive_result(&self) -> GameResult {
        let won = self
            .committed
            .last()
            .is_some_and(|guess| guess.word() == self.solution.text());

        if won {
            GameResult::Win
        } else if self.committed.len() >= self.total_guesses {
            GameResult::Loss
        } else {
            GameResult::Unfinished
        }
    }

    pub(crate) fn current_mut(&mut self) -> &mut CurrentGuess {
        &mut self.current
    }

    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    #[must_use]
    pub fn committed_guesses(&self) -> &[CommittedGuess] {
        &self.committed
    }

    #[must_use]
    pub fn current_guess(&self) -> &CurrentGuess {
        &self.current
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.total_guesses - self.committed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn committed(guess: &str, solution: &str) -> CommittedGuess {
        let guess = Word::new(guess).unwrap();
        let solution = Word::new(solution).unwrap();
        CommittedGuess::new(score(&guess, &solution))
    }

    fn solution() -> Word {
        Word::new("uscle").unwrap()
    }

    #[test]
    fn new_session_is_unfinished_and_empty() {
        let session = Session::new(solution(), DEFAULT_TOTAL_GUESSES);

        assert_eq!(session.result(), GameResult::Unfinished);
        assert!(session.committed_guesses().is_empty());
        assert!(session.current_guess().is_empty());
        assert_eq!(session.guesses_left(), 6);
    }

    #[test]
    fn commit_matching_guess_wins() {
        let mut session = Session::new(solution(), DEFAULT_TOTAL_GUESSES);
        session.commit(committed("uscle", "uscle"));

        assert_eq!(session.result(), GameResult::Win);
    }

    #[test]
    fn win_on_any_turn_regardless_of_count() {
        let mut session = Session::new(solution(), DEFAULT_TOTAL_GUESSES);
        session.commit(committed("speed", "uscle"));
        session.commit(committed("uscle", "uscle"));

        assert_eq!(session.result(), GameResult::Win);
        assert_eq!(session.committed_guesses().len(), 2);
    }

    #[test]
    fn sixth_non_matching_commit_loses() {
        let mut session = Session::new(solution(), DEFAULT_TOTAL_GUESSES);
        for _ in 0..5 {
            session.commit(committed("speed", "uscle"));
            assert_eq!(session.result(), GameResult::Unfinished);
        }
        session.commit(committed("speed", "uscle"));

        assert_eq!(session.result(), GameResult::Loss);
        assert_eq!(session.guesses_left(), 0);
    }

    #[test]
    fn commit_clears_current_guess() {
        let mut session = Session::new(solution(), DEFAULT_TOTAL_GUESSES);
        session.current_mut().push('A');
        session.commit(committed("speed", "uscle"));

        assert!(session.current_guess().is_empty());
    }

    #[test]
    fn resume_replays_into_win() {
        let history = vec![committed("speed", "uscle"), committed("uscle", "uscle")];
        let session = Session::resume(solution(), DEFAULT_TOTAL_GUESSES, history);

        assert_eq!(session.result(), GameResult::Win);
        assert_eq!(session.committed_guesses().len(), 2);
    }

    #[test]
    fn resume_replays_into_loss() {
        let history = vec![committed("speed", "uscle"); 6];
        let session = Session::resume(solution(), DEFAULT_TOTAL_GUESSES, history);

        assert_eq!(session.result(), GameResult::Loss);
    }

    #[test]
    fn resume_drops_entries_after_terminal_state() {
        let history = vec![committed("uscle", "uscle"), committed("speed", "uscle")];
        let session = Session::resume(solution(), DEFAULT_TOTAL_GUESSES, history);

        assert_eq!(session.result(), GameResult::Win);
        assert_eq!(session.committed_guesses().len(), 1);
    }

    #[test]
    fn resume_caps_history_at_guess_budget() {
        let history = vec![committed("speed", "uscle"); 9];
        let session = Session::resume(solution(), DEFAULT_TOTAL_GUESSES, history);

        assert_eq!(session.committed_guesses().len(), DEFAULT_TOTAL_GUESSES);
        assert_eq!(session.result(), GameResult::Loss);
    }

    #[test]
    fn resume_with_empty_history_is_fresh() {
        let session = Session::resume(solution(), DEFAULT_TOTAL_GUESSES, Vec::new());

        assert_eq!(session.result(), GameResult::Unfinished);
        assert!(session.committed_guesses().is_empty());
    }
}
