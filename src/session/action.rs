//! Inbound user actions
//!
//! Discrete events from the control surface, one per button press.

use std::fmt;

/// One user action on the active page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the menu and begin playing
    Start,
    /// Press a letter key
    Letter(u8),
    /// Submit the composed guess
    Submit,
    /// Clear the in-progress row
    Clear,
    /// Abandon the session
    Cancel,
    /// Step to the previous keyboard page
    PagePrevious,
    /// Step to the next keyboard page
    PageNext,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Letter(letter) => write!(f, "letter({})", letter.to_ascii_uppercase() as char),
            Self::Submit => write!(f, "submit"),
            Self::Clear => write!(f, "clear"),
            Self::Cancel => write!(f, "cancel"),
            Self::PagePrevious => write!(f, "page-previous"),
            Self::PageNext => write!(f, "page-next"),
        }
    }
}
