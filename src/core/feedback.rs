//! Guess feedback scoring
//!
//! Scoring compares a guess against the solution position by position. The
//! two-pass algorithm reserves exact matches before presence checks, so a
//! duplicated guess letter never claims more occurrences than the solution
//! actually has.

use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};

/// Per-letter feedback for a committed guess
///
/// An exact match takes precedence over a presence match for the same letter
/// instance; a letter is never both. The variants are ordered by feedback
/// strength, which is what the on-screen keyboard aggregation sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterFeedback {
    /// Letter is absent from the solution, or all its occurrences are claimed
    NoMatch,
    /// Letter occurs in the solution at a different position
    Exists,
    /// Letter is in the correct position
    Match,
}

/// A single letter of a committed guess together with its feedback
///
/// Immutable once produced by [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLetter {
    pub value: char,
    pub feedback: LetterFeedback,
}

/// Score a guess against the solution
///
/// # Algorithm
/// 1. Start from a per-position copy of the solution where slots can be
///    consumed.
/// 2. First pass: exact matches are marked `Match` and consume their slot.
/// 3. Second pass: each remaining guess letter scans the unconsumed slots
///    left to right; a hit marks `Exists` and consumes the lowest-index
///    occurrence, otherwise the letter stays `NoMatch`.
///
/// Output order matches guess order. Total for all validated [`Word`] inputs.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterFeedback, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let solution = Word::new("slate").unwrap();
/// let scored = score(&guess, &solution);
///
/// assert_eq!(scored[0].feedback, LetterFeedback::NoMatch); // C
/// assert_eq!(scored[2].feedback, LetterFeedback::Match); // A
/// assert_eq!(scored[4].feedback, LetterFeedback::Match); // E
/// ```
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> [ScoredLetter; WORD_LEN] {
    let mut scored = guess.chars().map(|value| ScoredLetter {
        value,
        feedback: LetterFeedback::NoMatch,
    });
    let mut remaining: [Option<char>; WORD_LEN] = solution.chars().map(Some);

    // First pass: exact matches consume their solution slot
    for i in 0..WORD_LEN {
        if guess.char_at(i) == solution.char_at(i) {
            scored[i].feedback = LetterFeedback::Match;
            remaining[i] = None;
        }
    }

    // Second pass: presence checks claim the first unconsumed occurrence
    for i in 0..WORD_LEN {
        if scored[i].feedback == LetterFeedback::Match {
            continue;
        }
        let wanted = Some(guess.char_at(i));
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == wanted) {
            scored[i].feedback = LetterFeedback::Exists;
            *slot = None;
        }
    }

    scored
}
