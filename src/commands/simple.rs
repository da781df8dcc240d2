//! Simple interactive CLI mode
//!
//! Text-based game without TUI: guesses are typed as whole words and the
//! grid is printed as emoji after every turn.

use super::play::PlayConfig;
use crate::core::Word;
use crate::output::{print_session_result, snapshot_to_text};
use crate::scores::JsonScoreStore;
use crate::session::{Action, SessionConfig, SessionController, Update};
use anyhow::Result;
use std::io::{self, Write as _};
use std::time::SystemTime;

/// Run one plain-text game session
///
/// # Errors
///
/// Returns an error if the score file cannot be read, the word list is
/// empty, or reading user input fails.
pub fn run_simple(words: &[Word], config: &PlayConfig) -> Result<()> {
    let store = JsonScoreStore::open(&config.scores)?;

    if store.played_recently(&config.user, SystemTime::now()) {
        let total = store.player(&config.user).map_or(0, |r| r.points);
        println!(
            "You have already played today. Come back tomorrow!\n\
             Total points: {total}"
        );
        return Ok(());
    }

    let session_config = SessionConfig {
        max_tries: config.max_tries,
        ..SessionConfig::default()
    };
    // No atlas: this surface renders the grid as text
    let mut controller = SessionController::new(
        config.user.as_str(),
        words,
        None,
        session_config,
        store,
    )?;

    println!("\n╔══════════════════════════════════════════╗");
    println!("║              Wordle Arcade               ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Type a 5-letter guess and press Enter.");
    println!("Commands: 'quit' to give up\n");

    let mut update = controller.apply(Action::Start);

    loop {
        if let Some(outcome) = update.outcome {
            print_session_result(outcome, &update.text, &update.grid);
            return Ok(());
        }

        show_update(&update);

        let input = get_user_input("Guess")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                update = controller.apply(Action::Cancel);
            }
            guess => {
                // Retype the row from scratch so a previous partial entry
                // never bleeds into this guess
                controller.apply(Action::Clear);
                for letter in guess.bytes() {
                    controller.apply(Action::Letter(letter));
                }
                update = controller.apply(Action::Submit);
            }
        }
    }
}

fn show_update(update: &Update) {
    if !update.text.is_empty() {
        println!("\n{}", update.text);
    }
    println!("\n{}", snapshot_to_text(&update.grid));
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
