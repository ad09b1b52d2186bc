//! Terminal Wordle
//!
//! A single-session word-guessing game: a fixed 5-letter solution, a bounded
//! number of attempts, per-letter feedback with exact duplicate-letter
//! handling, and a session that survives process restarts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterFeedback, Word, score};
//!
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("slate").unwrap();
//! let scored = score(&guess, &solution);
//!
//! assert_eq!(scored[2].feedback, LetterFeedback::Match); // A
//! ```

// Core domain types
pub mod core;

// Game state machine and persistence
pub mod game;

// Built-in solution words
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
