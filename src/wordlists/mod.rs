//! Built-in solution words
//!
//! A small curated list the binary draws from when no solution is supplied
//! on the command line. The game core never touches this module; a session
//! always receives its solution pre-supplied.

use crate::core::Word;
use rand::seq::IndexedRandom;

/// Candidate solutions for the convenience pick
pub const SOLUTIONS: &[&str] = &[
    "about", "admit", "adore", "agent", "alarm", "amber", "ample", "anger", "apple", "arise",
    "badge", "basic", "beach", "blaze", "blend", "brave", "bread", "brick", "bring", "brush",
    "cabin", "candy", "cargo", "chase", "chess", "claim", "clear", "climb", "cloud", "coast",
    "crane", "crisp", "crowd", "dance", "depth", "dream", "drift", "eager", "earth", "elbow",
    "fable", "faith", "feast", "fiber", "flame", "fleet", "flour", "forge", "frost", "fruit",
    "ghost", "glide", "grain", "grasp", "green", "habit", "haste", "heart", "hedge", "hoist",
    "image", "ivory", "joint", "judge", "knack", "lemon", "light", "lodge", "lunar", "march",
    "medal", "mirth", "mount", "night", "noble", "ocean", "olive", "orbit", "paint", "pearl",
    "pilot", "plain", "plush", "pride", "prize", "quilt", "radio", "raven", "ridge", "river",
    "robin", "salty", "scale", "shade", "shine", "slate", "smile", "spark", "spice", "stone",
    "storm", "sugar", "table", "tiger", "torch", "trail", "tulip", "unity", "vault", "vivid",
    "wagon", "waste", "whale", "wheat", "world", "yield", "youth", "zesty",
];

/// Pick a random solution from the built-in list
///
/// # Panics
/// Will not panic - the list is non-empty and holds only valid words
/// (enforced by tests).
#[must_use]
pub fn random_solution() -> Word {
    let text = SOLUTIONS
        .choose(&mut rand::rng())
        .expect("solutions list is non-empty");
    Word::new(*text).expect("solutions list holds only valid words")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_solutions_are_valid_words() {
        for &text in SOLUTIONS {
            assert!(Word::new(text).is_ok(), "invalid solution word: {text}");
        }
    }

    #[test]
    fn solutions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &text in SOLUTIONS {
            assert!(seen.insert(text), "duplicate solution word: {text}");
        }
    }

    #[test]
    fn random_solution_comes_from_the_list() {
        let word = random_solution();
        assert!(
            SOLUTIONS
                .iter()
                .any(|&text| text.eq_ignore_ascii_case(word.text()))
        );
    }
}
