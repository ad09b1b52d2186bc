//! In-progress and committed guesses
//!
//! A guess is mutable only while it is the current one; committing scores it
//! and freezes it as an ordered row of [`ScoredLetter`].

use super::feedback::ScoredLetter;
use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The uncommitted guess being typed
///
/// Holds 0 to 5 characters of the input alphabet. Committing clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentGuess {
    letters: Vec<char>,
}

impl CurrentGuess {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(WORD_LEN),
        }
    }

    /// Append a character; returns false when already full
    pub fn push(&mut self, c: char) -> bool {
        if self.letters.len() < WORD_LEN {
            self.letters.push(c);
            true
        } else {
            false
        }
    }

    /// Remove and return the last character, if any
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LEN
    }

    /// Characters typed so far, in order
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The full guess as a [`Word`], or None while shorter than 5 characters
    #[must_use]
    pub fn to_word(&self) -> Option<Word> {
        let chars: [char; WORD_LEN] = self.letters.as_slice().try_into().ok()?;
        Some(Word::from_chars(chars))
    }
}

/// A scored, committed guess
///
/// Append-only history entry; letters and feedback never change after commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedGuess {
    letters: [ScoredLetter; WORD_LEN],
}

impl CommittedGuess {
    #[must_use]
    pub fn new(letters: [ScoredLetter; WORD_LEN]) -> Self {
        Self { letters }
    }

    #[must_use]
    pub const fn letters(&self) -> &[ScoredLetter; WORD_LEN] {
        &self.letters
    }

    /// The word this guess spells, concatenated in position order
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|letter| letter.value).collect()
    }
}

impl fmt::Display for CommittedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feedback::score;

    #[test]
    fn current_guess_push_caps_at_word_len() {
        let mut guess = CurrentGuess::new();
        for c in ['C', 'R', 'A', 'N', 'E'] {
            assert!(guess.push(c));
        }
        assert!(guess.is_full());
        assert!(!guess.push('S'));
        assert_eq!(guess.len(), WORD_LEN);
    }

    #[test]
    fn current_guess_pop() {
        let mut guess = CurrentGuess::new();
        guess.push('A');
        guess.push('B');

        assert_eq!(guess.pop(), Some('B'));
        assert_eq!(guess.pop(), Some('A'));
        assert_eq!(guess.pop(), None);
        assert!(guess.is_empty());
    }

    #[test]
    fn current_guess_to_word_requires_full() {
        let mut guess = CurrentGuess::new();
        for c in ['C', 'R', 'A', 'N'] {
            guess.push(c);
        }
        assert!(guess.to_word().is_none());

        guess.push('E');
        assert_eq!(guess.to_word().unwrap().text(), "CRANE");
    }

    #[test]
    fn committed_guess_spells_its_word() {
        let guess = Word::new("speed").unwrap();
        let solution = Word::new("erase").unwrap();
        let committed = CommittedGuess::new(score(&guess, &solution));

        assert_eq!(committed.word(), "SPEED");
        assert_eq!(format!("{committed}"), "SPEED");
    }

    #[test]
    fn committed_guess_serde_round_trip() {
        let guess = Word::new("robot").unwrap();
        let solution = Word::new("floor").unwrap();
        let committed = CommittedGuess::new(score(&guess, &solution));

        let json = serde_json::to_string(&committed).unwrap();
        let restored: CommittedGuess = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, committed);
    }
}
