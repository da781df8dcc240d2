//! Command implementations

pub mod leaderboard;
pub mod play;
pub mod render;
pub mod simple;

pub use leaderboard::run_leaderboard;
pub use play::{PlayConfig, run_play};
pub use render::{RenderConfig, run_render};
pub use simple::run_simple;

use crate::grid::{AssetPaths, SpriteAtlas};
use std::path::Path;
use tracing::warn;

/// Load the sprite atlas from an asset directory, or fall back to the
/// built-in flat-color sprites
///
/// Asset problems degrade the image, never the game.
pub(crate) fn resolve_atlas(assets: Option<&Path>) -> SpriteAtlas {
    let Some(root) = assets else {
        return SpriteAtlas::flat();
    };

    let paths = AssetPaths::from_root(root);
    match SpriteAtlas::load(&paths) {
        Ok(atlas) => atlas,
        Err(e) => {
            warn!(error = %e, %paths, "sprite atlas load failed, using flat colors");
            SpriteAtlas::flat()
        }
    }
}
