//! One-shot scoring command
//!
//! Scores a single guess against an answer and prints the colored result.
//! Handy for checking a board from another device, or the scorer itself.

use crate::core::{CommittedGuess, Word, WordError, score};
use crate::output::formatters::{colored_row, emoji_row};

/// Score `guess` against `answer` and print the colored and emoji rows
///
/// # Errors
/// Returns the validation error when either word is malformed.
pub fn run_score(guess: &str, answer: &str) -> Result<(), WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let committed = CommittedGuess::new(score(&guess, &answer));

    println!("{}", colored_row(&committed));
    println!("{}", emoji_row(&committed));
    Ok(())
}
