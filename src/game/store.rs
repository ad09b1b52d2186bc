//! Session persistence
//!
//! Committed guesses survive process restarts through a [`SessionStore`].
//! The store is deliberately forgiving: missing or malformed history loads as
//! an empty game, and save failures are swallowed so the game keeps playing.

use crate::core::CommittedGuess;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Load/save capability for committed-guess history
pub trait SessionStore {
    /// Read the persisted history
    ///
    /// Called once at controller construction. Missing or malformed data is
    /// empty history, never an error.
    fn load(&mut self) -> Vec<CommittedGuess>;

    /// Persist the history after a commit; fire-and-forget
    fn save(&mut self, guesses: &[CommittedGuess]);

    /// Drop the persisted history (explicit reset path)
    fn clear(&mut self);
}

/// File-backed store, one JSON array of committed guesses per session
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&mut self) -> Vec<CommittedGuess> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, guesses: &[CommittedGuess]) {
        if let Ok(data) = serde_json::to_string(guesses) {
            let _ = fs::write(&self.path, data);
        }
    }

    fn clear(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// In-memory store
///
/// Clones share the same backing history (the model is single-threaded), so a
/// test can keep a handle and observe what the controller saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    guesses: Rc<RefCell<Vec<CommittedGuess>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current persisted contents
    #[must_use]
    pub fn snapshot(&self) -> Vec<CommittedGuess> {
        self.guesses.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&mut self) -> Vec<CommittedGuess> {
        self.guesses.borrow().clone()
    }

    fn save(&mut self, guesses: &[CommittedGuess]) {
        *self.guesses.borrow_mut() = guesses.to_vec();
    }

    fn clear(&mut self) {
        self.guesses.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};
    use std::env;

    fn committed(guess: &str, solution: &str) -> CommittedGuess {
        let guess = Word::new(guess).unwrap();
        let solution = Word::new(solution).unwrap();
        CommittedGuess::new(score(&guess, &solution))
    }

    fn temp_store(name: &str) -> JsonFileStore {
        let path = env::temp_dir().join(format!("wordle_store_{}_{name}.json", std::process::id()));
        let mut store = JsonFileStore::new(path);
        store.clear();
        store
    }

    #[test]
    fn json_store_round_trip() {
        let mut store = temp_store("round_trip");
        let history = vec![committed("speed", "uscle"), committed("uscle", "uscle")];

        store.save(&history);
        assert_eq!(store.load(), history);

        store.clear();
    }

    #[test]
    fn json_store_missing_file_loads_empty() {
        let mut store = temp_store("missing");
        assert!(store.load().is_empty());
    }

    #[test]
    fn json_store_malformed_data_loads_empty() {
        let mut store = temp_store("malformed");
        fs::write(store.path(), "{not json at all").unwrap();

        assert!(store.load().is_empty());

        store.clear();
    }

    #[test]
    fn json_store_clear_removes_history() {
        let mut store = temp_store("clear");
        store.save(&[committed("speed", "uscle")]);
        store.clear();

        assert!(store.load().is_empty());
    }

    #[test]
    fn memory_store_clones_share_history() {
        let mut store = MemoryStore::new();
        let handle = store.clone();

        store.save(&[committed("speed", "uscle")]);

        assert_eq!(handle.snapshot().len(), 1);
        assert_eq!(handle.snapshot()[0].word(), "SPEED");
    }
}
