//! Interactive session state machine
//!
//! One session owns its game state, grid and keyboard exclusively; actions
//! are processed strictly in arrival order, one at a time, and every
//! processed action yields exactly one render update.

mod action;
mod controller;
mod controls;
mod navigator;

pub use action::Action;
pub use controller::{Outcome, Phase, SessionConfig, SessionController, Update};
pub use controls::{ControlKind, ControlView, KeyBoard, KeyColor, LetterKey, PageId};
pub use navigator::Navigator;
