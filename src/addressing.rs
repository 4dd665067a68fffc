//! Page/column addressing model.
//!
//! The SSD1306 display RAM is 8 pages of 128 columns. A page is an 8-pixel
//! horizontal band and every data byte fills one column of one page, LSB at
//! the top. The controller keeps a write cursor that cannot be read back,
//! so the driver reprograms it before every data frame.
//!
//! ```text
//!            column 0 ........................ column 127
//!  page 0  ┌──────────────────────────────────────────────┐  rows 0-7
//!  page 1  │                                              │  rows 8-15
//!   ...    │                                              │
//!  page 7  └──────────────────────────────────────────────┘  rows 56-63
//! ```
//!
//! Text coordinates are in character cells instead: a text row is a page,
//! a text column is [`GLYPH_WIDTH`] (or [`GLYPH2X_WIDTH`]) pixel columns.

use core::ops::Range;

use crate::command::{SET_HIGH_COLUMN, SET_LOW_COLUMN, SET_PAGE_ADDR};
use crate::error::Error;

/// Number of pages (8-pixel bands).
pub const NUM_PAGES: u8 = 8;

/// Number of pixel columns.
pub const NUM_COLUMNS: u8 = 128;

/// Width of a 6×8 glyph in pixel columns.
pub const GLYPH_WIDTH: u8 = 6;

/// Width of an 8×16 glyph in pixel columns.
pub const GLYPH2X_WIDTH: u8 = 8;

/// Text cells per row with the 6×8 font (`128 / 6`, truncated).
pub const MAX_TEXT: u8 = NUM_COLUMNS / GLYPH_WIDTH;

/// Text cells per row with the 8×16 font.
pub const MAX_TEXT2X: u8 = NUM_COLUMNS / GLYPH2X_WIDTH;

/// The three commands that move the write cursor to `(page, column)`.
///
/// Callers must have checked `page < NUM_PAGES` and `column < NUM_COLUMNS`.
pub fn position_commands(page: u8, column: u8) -> [u8; 3] {
    [
        SET_PAGE_ADDR | (page & 0x07),
        SET_LOW_COLUMN | (column & 0x0F),
        SET_HIGH_COLUMN | ((column >> 4) & 0x0F),
    ]
}

/// Returns `true` if `(page, column)` is a cell of the grid.
pub fn in_bounds(page: u8, column: u8) -> bool {
    page < NUM_PAGES && column < NUM_COLUMNS
}

/// A validated rectangle of page/column cells.
///
/// Construction guarantees `start_row + rows <= 8` and
/// `start_column + columns <= 128`. Empty regions are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    start_row: u8,
    start_column: u8,
    rows: u8,
    columns: u8,
}

impl Region {
    /// Validate a region; `None` if any part falls outside the grid.
    pub fn new(start_row: u8, start_column: u8, rows: u8, columns: u8) -> Option<Self> {
        let row_end = start_row as u16 + rows as u16;
        let column_end = start_column as u16 + columns as u16;
        if start_row >= NUM_PAGES
            || start_column >= NUM_COLUMNS
            || row_end > NUM_PAGES as u16
            || column_end > NUM_COLUMNS as u16
        {
            return None;
        }
        Some(Self {
            start_row,
            start_column,
            rows,
            columns,
        })
    }

    /// The whole 8 × 128 grid.
    pub const fn full_screen() -> Self {
        Self {
            start_row: 0,
            start_column: 0,
            rows: NUM_PAGES,
            columns: NUM_COLUMNS,
        }
    }

    pub fn start_row(&self) -> u8 {
        self.start_row
    }

    pub fn start_column(&self) -> u8 {
        self.start_column
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Number of cells (bytes) covered.
    pub fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Page indices covered, top to bottom.
    pub fn pages(&self) -> Range<u8> {
        self.start_row..self.start_row + self.rows
    }
}

/// Validate a region, reporting the request itself on failure.
pub(crate) fn checked_region<E>(
    start_row: u8,
    start_column: u8,
    rows: u8,
    columns: u8,
) -> Result<Region, Error<E>> {
    Region::new(start_row, start_column, rows, columns).ok_or(Error::OutOfRange {
        row: start_row,
        column: start_column,
        rows,
        columns,
    })
}
