//! Grid image rendering
//!
//! Accumulates one row of cells per guess and composes the whole grid
//! (header + rows) into an image after every user action, so the visible
//! grid always reflects in-progress typing. Composition is a pure function
//! of the grid state: identical state yields byte-identical pixels.

mod renderer;
mod sprites;

pub use renderer::{Cell, GridError, GridRenderer, GridSnapshot, RenderError};
pub use sprites::{AssetPaths, SpriteAtlas};
