//! JSON-backed score store
//!
//! Keeps per-player point totals and the last-played timestamp. The play
//! command uses the timestamp to enforce one game per day; the leaderboard
//! command reads the totals.

use super::ScoreSink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

/// One game per player within this window
pub const PLAY_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Score store failures
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Score store I/O error: {e}"),
            Self::Format(e) => write!(f, "Score store format error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

/// Persistent record for one player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub points: u64,
    /// Seconds since the Unix epoch of the last completed game
    pub last_played: Option<u64>,
}

/// Score store persisted as one JSON file
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    players: BTreeMap<String, PlayerRecord>,
}

impl JsonScoreStore {
    /// Open the store, loading existing records if the file exists
    ///
    /// # Errors
    /// Returns `StoreError` when the file exists but cannot be read or
    /// parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let players = if path.exists() {
            let content = fs::read_to_string(&path).map_err(StoreError::Io)?;
            serde_json::from_str(&content).map_err(StoreError::Format)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, players })
    }

    /// Where the store persists
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record for one player, if any
    #[must_use]
    pub fn player(&self, user: &str) -> Option<&PlayerRecord> {
        self.players.get(user)
    }

    /// True iff the player completed a game within `PLAY_WINDOW` of `now`
    #[must_use]
    pub fn played_recently(&self, user: &str, now: SystemTime) -> bool {
        let Some(last) = self.players.get(user).and_then(|r| r.last_played) else {
            return false;
        };
        let now_secs = epoch_secs(now);
        now_secs.saturating_sub(last) < PLAY_WINDOW.as_secs()
    }

    /// Top `n` players by points, descending
    #[must_use]
    pub fn top_players(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .players
            .iter()
            .map(|(user, record)| (user.clone(), record.points))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Persist all records to the JSON file
    ///
    /// # Errors
    /// Returns `StoreError` on write or serialization failure.
    pub fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.players).map_err(StoreError::Format)?;
        fs::write(&self.path, content).map_err(StoreError::Io)
    }

    fn record(&mut self, user: &str, points: u32, now: SystemTime) {
        let entry = self.players.entry(user.to_string()).or_default();
        entry.points += u64::from(points);
        entry.last_played = Some(epoch_secs(now));
    }
}

impl ScoreSink for JsonScoreStore {
    /// Record and persist; persistence failure degrades to a warning since
    /// the session outcome has already been decided.
    fn record_score(&mut self, user: &str, points: u32) {
        self.record(user, points, SystemTime::now());
        if let Err(e) = self.save() {
            warn!(user, points, error = %e, "failed to persist score");
        }
    }
}

fn epoch_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
