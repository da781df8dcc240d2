//! Grid state and image composition
//!
//! One row per attempt, one cell per letter. Letters typed during input are
//! written with the `Empty` placeholder classification and overwritten with
//! the final verdicts once the guess is evaluated.

use crate::core::{Classification, Evaluation, WORD_LENGTH};
use image::{Rgba, RgbaImage, imageops};
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;

use super::SpriteAtlas;

/// One grid cell: a letter with its verdict, or unfilled
pub type Cell = Option<(u8, Classification)>;

/// Canvas background
const BACKGROUND: Rgba<u8> = Rgba([18, 18, 19, 255]);
/// Outer margin around header and grid
const MARGIN: u32 = 12;
/// Gap between cells and rows
const GAP: u32 = 6;

/// Grid-state contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `next_row` called before the current row was full
    RowIncomplete { filled: usize },
    /// Every row has already been committed
    RowsExhausted,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowIncomplete { filled } => {
                write!(f, "Row holds {filled} of {WORD_LENGTH} cells")
            }
            Self::RowsExhausted => write!(f, "All grid rows are committed"),
        }
    }
}

impl std::error::Error for GridError {}

/// Image composition failures
#[derive(Debug)]
pub enum RenderError {
    /// No sprite atlas is configured
    NoAtlas,
    /// An asset file failed to load or decode
    Asset {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Cell sprite dimensions are inconsistent
    BadAtlas(String),
    /// The atlas holds no sprite for this cell
    MissingSprite {
        classification: Classification,
        letter: u8,
    },
    /// PNG encoding failed
    Encode(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAtlas => write!(f, "No sprite atlas configured"),
            Self::Asset { path, source } => {
                write!(f, "Failed to load asset {}: {source}", path.display())
            }
            Self::BadAtlas(detail) => write!(f, "Inconsistent sprite atlas: {detail}"),
            Self::MissingSprite {
                classification,
                letter,
            } => write!(
                f,
                "No {classification} sprite for letter '{}'",
                *letter as char
            ),
            Self::Encode(source) => write!(f, "PNG encoding failed: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Asset { source, .. } | Self::Encode(source) => Some(source),
            _ => None,
        }
    }
}

/// Plain-data view of the grid for text render surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: Vec<[Cell; WORD_LENGTH]>,
}

impl GridSnapshot {
    /// All rows, committed first, then the in-progress row, then blanks
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[[Cell; WORD_LENGTH]] {
        &self.rows
    }

    /// A snapshot with every cell unfilled
    #[must_use]
    pub fn blank(max_rows: usize) -> Self {
        Self {
            rows: vec![[None; WORD_LENGTH]; max_rows],
        }
    }
}

/// Accumulates guess rows and composes them into an image
pub struct GridRenderer {
    atlas: Option<SpriteAtlas>,
    committed: Vec<[Cell; WORD_LENGTH]>,
    current: [Cell; WORD_LENGTH],
    column: usize,
    max_rows: usize,
}

impl GridRenderer {
    /// A grid with `max_rows` attempt rows
    #[must_use]
    pub fn new(max_rows: usize, atlas: Option<SpriteAtlas>) -> Self {
        Self {
            atlas,
            committed: Vec::with_capacity(max_rows),
            current: [None; WORD_LENGTH],
            column: 0,
            max_rows,
        }
    }

    /// True iff the current row has room for another cell
    #[inline]
    #[must_use]
    pub const fn has_next_column(&self) -> bool {
        self.column < WORD_LENGTH
    }

    /// Current write position as (row, column)
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.committed.len(), self.column)
    }

    /// Write a cell at the cursor and advance the column
    ///
    /// No-op returning `false` when the row is already full.
    pub fn append_cell(&mut self, letter: u8, classification: Classification) -> bool {
        if !self.has_next_column() {
            return false;
        }
        self.current[self.column] = Some((letter.to_ascii_lowercase(), classification));
        self.column += 1;
        true
    }

    /// Overwrite the current row with the final verdicts of an evaluation
    pub fn set_processed_row(&mut self, evaluation: &Evaluation) {
        for score in evaluation.scores() {
            self.current[score.position] = Some((score.letter, score.classification));
        }
        self.column = WORD_LENGTH;
    }

    /// Reset the current row to unfilled cells; the row index is unchanged
    pub fn clear_row(&mut self) {
        self.current = [None; WORD_LENGTH];
        self.column = 0;
    }

    /// Commit the full current row and move the cursor to a fresh row
    ///
    /// # Errors
    /// - `GridError::RowIncomplete` when the current row is not full
    /// - `GridError::RowsExhausted` when every row is already committed
    pub fn next_row(&mut self) -> Result<(), GridError> {
        if self.column != WORD_LENGTH {
            return Err(GridError::RowIncomplete {
                filled: self.column,
            });
        }
        if self.committed.len() >= self.max_rows {
            return Err(GridError::RowsExhausted);
        }
        self.committed.push(self.current);
        self.current = [None; WORD_LENGTH];
        self.column = 0;
        Ok(())
    }

    /// Plain-data view: committed rows, the in-progress row, then blanks
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        let mut rows = self.committed.clone();
        if rows.len() < self.max_rows {
            rows.push(self.current);
        }
        while rows.len() < self.max_rows {
            rows.push([None; WORD_LENGTH]);
        }
        GridSnapshot { rows }
    }

    /// True iff an atlas is configured, making `compose` possible
    #[inline]
    #[must_use]
    pub const fn can_compose(&self) -> bool {
        self.atlas.is_some()
    }

    /// Compose header + all rows into an image
    ///
    /// Pure function of the grid state: composing twice from identical state
    /// produces identical pixel buffers.
    ///
    /// # Errors
    /// Returns `RenderError::NoAtlas` without an atlas, or a sprite lookup
    /// failure.
    pub fn compose(&self) -> Result<RgbaImage, RenderError> {
        let atlas = self.atlas.as_ref().ok_or(RenderError::NoAtlas)?;
        let (cell_w, cell_h) = atlas.cell_size();
        let rows = self.snapshot();

        let grid_w = WORD_LENGTH as u32 * cell_w + (WORD_LENGTH as u32 - 1) * GAP;
        let grid_h = self.max_rows as u32 * cell_h + (self.max_rows as u32 - 1) * GAP;
        let header_h = atlas.header().height();

        let canvas_w = grid_w.max(atlas.header().width()) + 2 * MARGIN;
        let canvas_h = MARGIN + header_h + MARGIN + grid_h + MARGIN;

        let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, BACKGROUND);

        let header_x = i64::from((canvas_w - atlas.header().width()) / 2);
        imageops::overlay(&mut canvas, atlas.header(), header_x, i64::from(MARGIN));

        let grid_x = (canvas_w - grid_w) / 2;
        let grid_y = MARGIN + header_h + MARGIN;

        for (row_idx, row) in rows.rows().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let sprite = match cell {
                    Some((letter, classification)) => atlas.cell(*classification, *letter)?,
                    None => atlas.blank(),
                };
                let x = i64::from(grid_x + col_idx as u32 * (cell_w + GAP));
                let y = i64::from(grid_y + row_idx as u32 * (cell_h + GAP));
                imageops::overlay(&mut canvas, sprite, x, y);
            }
        }

        Ok(canvas)
    }

    /// Compose and encode the grid as PNG bytes
    ///
    /// # Errors
    /// Propagates `compose` failures; `RenderError::Encode` on encoder
    /// failure.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let img = self.compose()?;
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png)
            .map_err(RenderError::Encode)?;
        Ok(bytes.into_inner())
    }
}
