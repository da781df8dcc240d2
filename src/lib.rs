//! Wordle Arcade
//!
//! A button-driven Wordle game engine: a session state machine reacts to
//! discrete user actions (letter presses, submit, clear, cancel, page
//! navigation), keeps a paged on-screen keyboard in sync with the game, and
//! composes the guess grid into an image after every action.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_arcade::core::{Word, evaluate};
//!
//! let secret = Word::new("slate").unwrap();
//! let guess = Word::new("crane").unwrap();
//!
//! let evaluation = evaluate(&secret, &guess);
//! assert!(!evaluation.is_winning());
//! ```

// Core domain types
pub mod core;

// Grid image rendering
pub mod grid;

// Interactive session state machine
pub mod session;

// Score recording and persistence
pub mod scores;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
