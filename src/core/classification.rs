//! Per-letter guess verdicts
//!
//! Every cell of the grid and every evaluated guess position carries one of
//! these verdicts. The derive order matters: `Ord` ranks
//! `Empty < Absent < Present < Correct`, which is exactly the priority used
//! when recoloring keyboard keys, so an upgrade is a plain `max`.

use std::fmt;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Placeholder for an unfilled or not-yet-evaluated cell
    Empty,
    /// Letter does not occur in the secret (beyond already-matched duplicates)
    Absent,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Right letter, right position
    Correct,
}

impl Classification {
    /// All evaluated verdicts, in priority order
    pub const EVALUATED: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Emoji square for text surfaces
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Short name, also used as the asset sub-directory key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
