//! Keyboard controls and page descriptors
//!
//! All 26 letter keys live in one shared `KeyBoard`; pages only select a
//! visible subset by letter range, so switching pages can never lose or
//! duplicate a key's enabled/color state. Controls carry an explicit kind
//! tag and behavior is selected by matching on it.

use crate::core::{Classification, Evaluation};
use std::fmt;

/// Letters shown on each keyboard page (the alphabet exceeds one surface)
pub const LETTER_PAGES: [(u8, u8); 2] = [(b'a', b'm'), (b'n', b'z')];

/// Kind tag carried by every control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Letter,
    Submit,
    Clear,
    Cancel,
    PagePrev,
    PageNext,
    Start,
}

/// Color state of a letter key
///
/// Derived from the highest-priority verdict ever observed for the letter.
/// The derive order makes recoloring a monotone upgrade: `max` implements
/// `Correct > Present > Absent > Default` and never downgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyColor {
    Default,
    Absent,
    Present,
    Correct,
}

impl From<Classification> for KeyColor {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Correct => Self::Correct,
            Classification::Present => Self::Present,
            Classification::Absent => Self::Absent,
            Classification::Empty => Self::Default,
        }
    }
}

/// One letter key on the shared keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterKey {
    letter: u8,
    enabled: bool,
    color: KeyColor,
}

impl LetterKey {
    /// A key for one letter
    ///
    /// # Panics
    /// A key labeled with anything but exactly one ASCII letter is a
    /// programming-contract violation and panics immediately.
    #[must_use]
    pub fn new(label: &str) -> Self {
        assert!(
            label.len() == 1 && label.bytes().all(|b| b.is_ascii_alphabetic()),
            "Letter key must be labeled with exactly one letter, got {label:?}"
        );
        Self {
            letter: label.as_bytes()[0].to_ascii_lowercase(),
            enabled: true,
            color: KeyColor::Default,
        }
    }

    /// The key's letter (ASCII lowercase)
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// Display label (uppercase)
    #[must_use]
    pub fn label(&self) -> String {
        (self.letter.to_ascii_uppercase() as char).to_string()
    }

    #[inline]
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> KeyColor {
        self.color
    }
}

/// Identity of one keyboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    /// Start/cancel menu shown before play begins
    Menu,
    /// Letter page, indexing into `LETTER_PAGES`
    Letters(usize),
}

/// Snapshot of one visible control for the render surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub kind: ControlKind,
    pub label: String,
    pub enabled: bool,
    pub color: KeyColor,
}

/// The single shared collection of letter keys
#[derive(Debug, Clone)]
pub struct KeyBoard {
    keys: Vec<LetterKey>,
}

impl Default for KeyBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBoard {
    /// A keyboard with all 26 letters enabled and uncolored
    #[must_use]
    pub fn new() -> Self {
        let keys = (b'a'..=b'z')
            .map(|letter| LetterKey::new(&((letter as char).to_string())))
            .collect();
        Self { keys }
    }

    /// The key for a letter
    ///
    /// # Panics
    /// Panics when `letter` is not an ASCII letter.
    #[must_use]
    pub fn key(&self, letter: u8) -> &LetterKey {
        let letter = letter.to_ascii_lowercase();
        assert!(letter.is_ascii_lowercase(), "not a letter: {letter}");
        &self.keys[usize::from(letter - b'a')]
    }

    /// Enable or disable every letter key at once
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for key in &mut self.keys {
            key.enabled = enabled;
        }
    }

    /// Upgrade key colors from a position-keyed evaluation
    ///
    /// Folds over every occurrence of each letter, so a letter that is both
    /// `Correct` and `Absent` in one guess keeps the `Correct` color.
    pub fn apply_evaluation(&mut self, evaluation: &Evaluation) {
        for score in evaluation.scores() {
            let index = usize::from(score.letter.to_ascii_lowercase() - b'a');
            let key = &mut self.keys[index];
            key.color = key.color.max(KeyColor::from(score.classification));
        }
    }

    /// Letter keys for a page range, in order
    fn page_keys(&self, range: (u8, u8)) -> impl Iterator<Item = &LetterKey> {
        let (first, last) = range;
        self.keys
            .iter()
            .filter(move |key| key.letter >= first && key.letter <= last)
    }

    /// Snapshot the visible controls of a page
    ///
    /// Arrow enablement mirrors the page navigator's bounds checks.
    #[must_use]
    pub fn page_view(&self, page: PageId, has_previous: bool, has_next: bool) -> Vec<ControlView> {
        match page {
            PageId::Menu => vec![
                ControlView {
                    kind: ControlKind::Start,
                    label: "Start".to_string(),
                    enabled: true,
                    color: KeyColor::Default,
                },
                ControlView {
                    kind: ControlKind::Cancel,
                    label: "Cancel".to_string(),
                    enabled: true,
                    color: KeyColor::Default,
                },
            ],
            PageId::Letters(index) => {
                let range = LETTER_PAGES[index];
                let mut controls: Vec<ControlView> = self
                    .page_keys(range)
                    .map(|key| ControlView {
                        kind: ControlKind::Letter,
                        label: key.label(),
                        enabled: key.enabled,
                        color: key.color,
                    })
                    .collect();

                controls.push(ControlView {
                    kind: ControlKind::Submit,
                    label: "Enter".to_string(),
                    enabled: true,
                    color: KeyColor::Default,
                });
                controls.push(ControlView {
                    kind: ControlKind::Clear,
                    label: "Clear".to_string(),
                    enabled: true,
                    color: KeyColor::Default,
                });
                controls.push(ControlView {
                    kind: ControlKind::Cancel,
                    label: "Cancel".to_string(),
                    enabled: true,
                    color: KeyColor::Default,
                });
                controls.push(ControlView {
                    kind: ControlKind::PagePrev,
                    label: "◀".to_string(),
                    enabled: has_previous,
                    color: KeyColor::Default,
                });
                controls.push(ControlView {
                    kind: ControlKind::PageNext,
                    label: "▶".to_string(),
                    enabled: has_next,
                    color: KeyColor::Default,
                });
                controls
            }
        }
    }
}

impl fmt::Display for LetterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
