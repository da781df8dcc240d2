//! Cell sprite sets and the header image
//!
//! Assets follow the original layout: one directory per classification
//! holding `a.png` .. `z.png`, a `blank.png` for unfilled cells and a
//! `header.png` banner. The atlas is resolved once before session start;
//! `flat()` builds a solid-color atlas in memory for asset-less runs and
//! tests.

use crate::core::Classification;
use image::{Rgba, RgbaImage};
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::RenderError;

/// Solid colors for the generated fallback atlas
const FLAT_CORRECT: Rgba<u8> = Rgba([106, 170, 100, 255]);
const FLAT_PRESENT: Rgba<u8> = Rgba([201, 180, 88, 255]);
const FLAT_ABSENT: Rgba<u8> = Rgba([58, 58, 60, 255]);
const FLAT_EMPTY: Rgba<u8> = Rgba([129, 131, 132, 255]);
const FLAT_BLANK: Rgba<u8> = Rgba([18, 18, 19, 255]);

const FLAT_CELL: u32 = 64;
const FLAT_HEADER_W: u32 = 384;
const FLAT_HEADER_H: u32 = 96;

/// Resolved locations of the grid assets
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub header: PathBuf,
    pub correct_dir: PathBuf,
    pub present_dir: PathBuf,
    pub absent_dir: PathBuf,
    pub empty_dir: PathBuf,
    pub blank: PathBuf,
}

impl AssetPaths {
    /// Conventional layout under one root directory
    #[must_use]
    pub fn from_root(root: &Path) -> Self {
        Self {
            header: root.join("header.png"),
            correct_dir: root.join("correct"),
            present_dir: root.join("present"),
            absent_dir: root.join("absent"),
            empty_dir: root.join("empty"),
            blank: root.join("blank.png"),
        }
    }

    fn dir_for(&self, classification: Classification) -> &Path {
        match classification {
            Classification::Correct => &self.correct_dir,
            Classification::Present => &self.present_dir,
            Classification::Absent => &self.absent_dir,
            Classification::Empty => &self.empty_dir,
        }
    }
}

impl fmt::Display for AssetPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assets at {}", self.header.display())
    }
}

/// In-memory sprites for grid composition
pub struct SpriteAtlas {
    header: RgbaImage,
    blank: RgbaImage,
    cells: FxHashMap<(Classification, u8), RgbaImage>,
    cell_width: u32,
    cell_height: u32,
}

impl SpriteAtlas {
    /// Load every sprite from the configured asset paths
    ///
    /// All cell sprites must share the blank sprite's dimensions.
    ///
    /// # Errors
    /// Returns `RenderError::Asset` when a file cannot be decoded and
    /// `RenderError::BadAtlas` when cell dimensions are inconsistent.
    pub fn load(paths: &AssetPaths) -> Result<Self, RenderError> {
        let header = load_sprite(&paths.header)?;
        let blank = load_sprite(&paths.blank)?;
        let (cell_width, cell_height) = blank.dimensions();

        let mut cells = FxHashMap::default();
        for classification in [
            Classification::Correct,
            Classification::Present,
            Classification::Absent,
            Classification::Empty,
        ] {
            let dir = paths.dir_for(classification);
            for letter in b'a'..=b'z' {
                let path = dir.join(format!("{}.png", letter as char));
                let sprite = load_sprite(&path)?;
                if sprite.dimensions() != (cell_width, cell_height) {
                    return Err(RenderError::BadAtlas(format!(
                        "{} is {}x{}, expected {cell_width}x{cell_height}",
                        path.display(),
                        sprite.width(),
                        sprite.height()
                    )));
                }
                cells.insert((classification, letter), sprite);
            }
        }

        Ok(Self {
            header,
            blank,
            cells,
            cell_width,
            cell_height,
        })
    }

    /// Solid-color atlas generated in memory (no letter glyphs)
    #[must_use]
    pub fn flat() -> Self {
        let mut cells = FxHashMap::default();
        for (classification, color) in [
            (Classification::Correct, FLAT_CORRECT),
            (Classification::Present, FLAT_PRESENT),
            (Classification::Absent, FLAT_ABSENT),
            (Classification::Empty, FLAT_EMPTY),
        ] {
            let tile = RgbaImage::from_pixel(FLAT_CELL, FLAT_CELL, color);
            for letter in b'a'..=b'z' {
                cells.insert((classification, letter), tile.clone());
            }
        }

        Self {
            header: RgbaImage::from_pixel(FLAT_HEADER_W, FLAT_HEADER_H, FLAT_BLANK),
            blank: RgbaImage::from_pixel(FLAT_CELL, FLAT_CELL, FLAT_BLANK),
            cells,
            cell_width: FLAT_CELL,
            cell_height: FLAT_CELL,
        }
    }

    /// Header banner
    #[inline]
    #[must_use]
    pub fn header(&self) -> &RgbaImage {
        &self.header
    }

    /// Sprite for an unfilled cell
    #[inline]
    #[must_use]
    pub fn blank(&self) -> &RgbaImage {
        &self.blank
    }

    /// Sprite for a filled cell
    ///
    /// # Errors
    /// Returns `RenderError::MissingSprite` when the atlas holds no sprite
    /// for the (classification, letter) pair.
    pub fn cell(
        &self,
        classification: Classification,
        letter: u8,
    ) -> Result<&RgbaImage, RenderError> {
        self.cells
            .get(&(classification, letter.to_ascii_lowercase()))
            .ok_or(RenderError::MissingSprite {
                classification,
                letter,
            })
    }

    /// Cell dimensions shared by every sprite
    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }
}

fn load_sprite(path: &Path) -> Result<RgbaImage, RenderError> {
    let img = image::open(path).map_err(|source| RenderError::Asset {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}
