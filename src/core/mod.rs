//! Core domain types for the game
//!
//! Pure types with no I/O: validated words, the in-progress and committed
//! guesses, and the feedback scorer.

mod feedback;
mod guess;
mod word;

pub use feedback::{LetterFeedback, ScoredLetter, score};
pub use guess::{CommittedGuess, CurrentGuess};
pub use word::{WORD_LEN, Word, WordError, normalize_input};
