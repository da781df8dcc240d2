//! Interactive TUI interface
//!
//! Maps terminal key events onto the session action protocol and draws the
//! controller's render updates with ratatui.

mod app;
mod rendering;

pub use app::{App, run_tui};
