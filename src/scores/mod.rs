//! Score recording and persistence
//!
//! The session controller reports one final point total per completed
//! session through the `ScoreSink` seam. Persistence, the daily-play
//! throttle and the leaderboard live behind it.

mod store;

pub use store::{JsonScoreStore, PlayerRecord, StoreError};

use rustc_hash::FxHashMap;

/// Receives the final point total of a completed session
///
/// Called exactly once per won or lost session, never on cancel.
pub trait ScoreSink {
    fn record_score(&mut self, user: &str, points: u32);
}

/// In-memory sink keeping per-user totals
///
/// Also records every event in order, which makes it a convenient test spy.
#[derive(Debug, Default)]
pub struct MemoryScores {
    totals: FxHashMap<String, u64>,
    events: Vec<(String, u32)>,
}

impl MemoryScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated total for a user
    #[must_use]
    pub fn total(&self, user: &str) -> u64 {
        self.totals.get(user).copied().unwrap_or(0)
    }

    /// Every recorded (user, points) event, in order
    #[must_use]
    pub fn events(&self) -> &[(String, u32)] {
        &self.events
    }
}

impl ScoreSink for MemoryScores {
    fn record_score(&mut self, user: &str, points: u32) {
        *self.totals.entry(user.to_string()).or_insert(0) += u64::from(points);
        self.events.push((user.to_string(), points));
    }
}
