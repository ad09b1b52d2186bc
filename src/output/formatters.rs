//! Formatting utilities for terminal output

use crate::core::{CommittedGuess, LetterFeedback, ScoredLetter};
use colored::{ColoredString, Colorize};

/// Render one scored letter as a colored cell
#[must_use]
pub fn colored_cell(letter: &ScoredLetter) -> ColoredString {
    let cell = format!(" {} ", letter.value);
    match letter.feedback {
        LetterFeedback::Match => cell.black().on_green(),
        LetterFeedback::Exists => cell.black().on_yellow(),
        LetterFeedback::NoMatch => cell.white().on_bright_black(),
    }
}

/// Render a committed guess as a row of colored cells
#[must_use]
pub fn colored_row(guess: &CommittedGuess) -> String {
    guess
        .letters()
        .iter()
        .map(|letter| colored_cell(letter).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji for one feedback value
#[must_use]
pub const fn feedback_emoji(feedback: LetterFeedback) -> char {
    match feedback {
        LetterFeedback::Match => '🟩',
        LetterFeedback::Exists => '🟨',
        LetterFeedback::NoMatch => '⬜',
    }
}

/// Emoji summary of a committed guess, shareable without spoiling letters
#[must_use]
pub fn emoji_row(guess: &CommittedGuess) -> String {
    guess
        .letters()
        .iter()
        .map(|letter| feedback_emoji(letter.feedback))
        .collect()
}
