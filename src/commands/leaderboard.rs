//! Leaderboard command

use crate::output::print_leaderboard;
use crate::scores::JsonScoreStore;
use anyhow::{Result, bail};
use std::path::Path;

/// Print the top `top` players from the score file
///
/// # Errors
///
/// Returns an error when `top` is zero or the score file cannot be read.
pub fn run_leaderboard(scores: &Path, top: usize) -> Result<()> {
    if top < 1 {
        bail!("the top parameter must have a value of at least 1");
    }

    let store = JsonScoreStore::open(scores)?;
    print_leaderboard(&store.top_players(top));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn rejects_zero_top() {
        let path = env::temp_dir().join("wordle_arcade_leaderboard_unused.json");
        assert!(run_leaderboard(&path, 0).is_err());
    }
}
