//! Word supply
//!
//! Provides the embedded word list compiled into the binary plus a loader
//! for custom lists. One list serves both as the secret-word pool and the
//! accepted guess vocabulary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn list_contains_playable_words() {
        for probe in ["crane", "slate", "speed", "erase"] {
            assert!(WORDS.contains(&probe), "'{probe}' missing from word list");
        }
    }
}
