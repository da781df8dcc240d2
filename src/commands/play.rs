//! Interactive TUI game mode

use crate::core::Word;
use crate::interactive::{App, run_tui};
use crate::output::print_session_result;
use crate::scores::JsonScoreStore;
use crate::session::{SessionConfig, SessionController};
use anyhow::Result;
use std::path::PathBuf;
use std::time::SystemTime;

/// Settings shared by the interactive game modes
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Player name used for scoring
    pub user: String,
    /// Score file location
    pub scores: PathBuf,
    /// Asset directory with cell sprites; flat colors when absent
    pub assets: Option<PathBuf>,
    /// Guesses per session
    pub max_tries: u32,
}

/// Run one TUI game session
///
/// Refuses to start when the player already played within the daily window,
/// showing their stored total instead.
///
/// # Errors
///
/// Returns an error if the score file cannot be read, the word list is
/// empty, or terminal I/O fails.
pub fn run_play(words: &[Word], config: &PlayConfig) -> Result<()> {
    let store = JsonScoreStore::open(&config.scores)?;

    if store.played_recently(&config.user, SystemTime::now()) {
        let total = store.player(&config.user).map_or(0, |r| r.points);
        println!(
            "You have already played today. Come back tomorrow!\n\
             Total points: {total}"
        );
        return Ok(());
    }

    let atlas = super::resolve_atlas(config.assets.as_deref());
    let session_config = SessionConfig {
        max_tries: config.max_tries,
        ..SessionConfig::default()
    };
    let controller = SessionController::new(
        config.user.as_str(),
        words,
        Some(atlas),
        session_config,
        store,
    )?;

    let app = run_tui(App::new(controller))?;

    if let Some(outcome) = app.outcome {
        print_session_result(outcome, &app.update.text, &app.update.grid);
    }

    Ok(())
}
