//! Display functions for command results

use super::formatters::snapshot_to_text;
use crate::grid::GridSnapshot;
use crate::session::Outcome;
use colored::Colorize;

/// Print the end-of-session banner
///
/// `detail` is the controller's final status text (it names the secret on a
/// loss) and `grid` the final snapshot, both taken from the terminal update.
pub fn print_session_result(outcome: Outcome, detail: &str, grid: &GridSnapshot) {
    println!("\n{}", "─".repeat(60).cyan());

    match outcome {
        Outcome::Won { points } => {
            println!("{}", format!("🎉 You won! +{points} points").green().bold());
        }
        Outcome::Lost { points } => {
            println!("{}", format!("❌ Out of tries. +{points} point").red().bold());
        }
        Outcome::Cancelled => {
            println!("{}", "Game cancelled.".bright_black());
        }
    }

    if !detail.is_empty() {
        println!("\n{detail}");
    }

    let text = snapshot_to_text(grid);
    if !text.is_empty() {
        println!("\n{text}");
    }

    println!("{}", "─".repeat(60).cyan());
}

/// Print the top players, highest total first
pub fn print_leaderboard(players: &[(String, u64)]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if players.is_empty() {
        println!("  No scores recorded yet.");
    }

    for (rank, (name, points)) in players.iter().enumerate() {
        let medal = match rank {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "  ",
        };
        println!(
            "  {} {} {}",
            medal,
            format!("{name:<20}").bright_white(),
            points.to_string().bright_yellow().bold()
        );
    }

    println!("{}", "═".repeat(40).cyan());
}
