//! Core domain types for the Wordle game
//!
//! This module contains the fundamental game types with zero I/O dependencies.
//! All types here are pure, testable, and have clear rules.

mod classification;
mod evaluation;
mod game;
mod word;

pub use classification::Classification;
pub use evaluation::{Evaluation, LetterScore, evaluate};
pub use game::{DEFAULT_MAX_TRIES, GameError, GameState, LOSS_POINTS};
pub use word::{Word, WordError};

/// Length of every secret word and guess
pub const WORD_LENGTH: usize = 5;
