//! Offline grid rendering
//!
//! Replays a transcript of guesses against a known secret and writes the
//! composed grid as a PNG file.

use crate::core::{Word, evaluate};
use crate::grid::GridRenderer;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Settings for the offline render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// File with one guess per line; blank lines and `#` comments skipped
    pub transcript: PathBuf,
    /// The secret the guesses were played against
    pub secret: String,
    /// Output PNG path
    pub output: PathBuf,
    /// Asset directory with cell sprites; flat colors when absent
    pub assets: Option<PathBuf>,
    /// Grid rows
    pub max_tries: u32,
}

/// Replay a transcript and write the grid image
///
/// Guesses past the row count are ignored, and the replay stops at the first
/// winning guess.
///
/// # Errors
///
/// Returns an error on transcript I/O failure, an invalid secret or guess,
/// or a composition/encoding failure.
pub fn run_render(config: &RenderConfig) -> Result<()> {
    let secret = Word::new(config.secret.as_str()).context("invalid secret word")?;
    let transcript = fs::read_to_string(&config.transcript)
        .with_context(|| format!("reading {}", config.transcript.display()))?;

    let atlas = super::resolve_atlas(config.assets.as_deref());
    let max_rows = config.max_tries as usize;
    let mut grid = GridRenderer::new(max_rows, Some(atlas));

    let mut rendered = 0usize;
    for line in transcript
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
    {
        if rendered == max_rows {
            break;
        }

        let guess = Word::new(line).with_context(|| format!("invalid guess {line:?}"))?;
        let evaluation = evaluate(&secret, &guess);
        let winning = evaluation.is_winning();

        grid.set_processed_row(&evaluation);
        grid.next_row()?;
        rendered += 1;

        if winning {
            break;
        }
    }

    let png = grid.encode_png()?;
    fs::write(&config.output, png)
        .with_context(|| format!("writing {}", config.output.display()))?;

    println!("Wrote {} ({rendered} rows)", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("wordle_arcade_render_{}_{name}", std::process::id()))
    }

    #[test]
    fn replays_transcript_to_png() {
        let transcript = temp_path("transcript.txt");
        let output = temp_path("grid.png");
        fs::write(&transcript, "# warmup\ncrane\nslate\n").unwrap();

        let config = RenderConfig {
            transcript: transcript.clone(),
            secret: "slate".to_string(),
            output: output.clone(),
            assets: None,
            max_tries: 6,
        };
        run_render(&config).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        fs::remove_file(&transcript).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn rejects_bad_secret() {
        let config = RenderConfig {
            transcript: temp_path("missing.txt"),
            secret: "toolong".to_string(),
            output: temp_path("never.png"),
            assets: None,
            max_tries: 6,
        };
        assert!(run_render(&config).is_err());
    }

    #[test]
    fn ignores_guesses_past_the_row_count() {
        let transcript = temp_path("overflow.txt");
        let output = temp_path("overflow.png");
        fs::write(&transcript, "crane\ncrane\ncrane\nslate\n").unwrap();

        let config = RenderConfig {
            transcript: transcript.clone(),
            secret: "slate".to_string(),
            output: output.clone(),
            assets: None,
            max_tries: 2,
        };
        run_render(&config).unwrap();
        assert!(output.exists());

        fs::remove_file(&transcript).ok();
        fs::remove_file(&output).ok();
    }
}
