//! Terminal output formatting
//!
//! Display utilities for CLI results and text-mode grids.

pub mod display;
pub mod formatters;

pub use display::{print_leaderboard, print_session_result};
pub use formatters::{evaluation_to_emoji, row_to_emoji, row_to_letters, snapshot_to_text};
