//! Wordle Arcade - CLI
//!
//! Button-driven Wordle game with TUI and plain-text modes, grid image
//! rendering and a persistent score ledger.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_arcade::{
    commands::{PlayConfig, RenderConfig, run_leaderboard, run_play, run_render, run_simple},
    core::Word,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_arcade",
    about = "Wordle game with a paged button keyboard, grid images and daily scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player name used for scoring
    #[arg(short, long, global = true, default_value = "player")]
    user: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Sprite asset directory (header.png, blank.png, one dir per verdict);
    /// built-in flat colors when omitted
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Score file location
    #[arg(long, global = true, default_value = "scores.json")]
    scores: PathBuf,

    /// Guesses per game
    #[arg(short, long, global = true, default_value = "6")]
    tries: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Plain-text game without TUI
    Simple,

    /// Render a guess transcript into a grid PNG
    Render {
        /// File with one guess per line
        transcript: PathBuf,

        /// The secret word the guesses were played against
        #[arg(short, long)]
        secret: String,

        /// Output PNG path
        #[arg(short, long, default_value = "grid.png")]
        output: PathBuf,
    },

    /// Show the top players
    Leaderboard {
        /// How many players to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_arcade::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let play_config = PlayConfig {
        user: cli.user,
        scores: cli.scores.clone(),
        assets: cli.assets.clone(),
        max_tries: cli.tries,
    };

    match command {
        Commands::Play => {
            let words = load_words(&cli.wordlist)?;
            run_play(&words, &play_config)
        }
        Commands::Simple => {
            let words = load_words(&cli.wordlist)?;
            run_simple(&words, &play_config)
        }
        Commands::Render {
            transcript,
            secret,
            output,
        } => run_render(&RenderConfig {
            transcript,
            secret,
            output,
            assets: cli.assets,
            max_tries: cli.tries,
        }),
        Commands::Leaderboard { top } => run_leaderboard(&cli.scores, top),
    }
}
