//! Game state machine and its collaborators
//!
//! The controller owns the session and is its only writer; persistence and
//! presentation reach it through narrow interfaces.

mod controller;
mod session;
mod store;

pub use controller::{GameController, Notification, REJECTED_WORD};
pub use session::{DEFAULT_TOTAL_GUESSES, GameResult, Session};
pub use store::{JsonFileStore, MemoryStore, SessionStore};
