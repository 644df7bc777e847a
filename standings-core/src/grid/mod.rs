//! The raw spreadsheet grid and the layout-driven passes over it.
//!
//! - [`cells`] turns currency/percent text into numbers with silent fallbacks
//! - [`layout`] names every row/column offset of the two-block sheet convention
//! - [`locator`] finds participant columns and their optional detail blocks
//! - [`extract`] builds one [`Participant`](crate::domain::Participant) per column

pub mod cells;
pub mod extract;
pub mod layout;
pub mod locator;

pub use cells::{parse_currency, parse_percent, parse_percent_or};
pub use extract::{extract_participant, extract_participants};
pub use layout::{AliasTable, DetailLayout, GridLayout, SummaryLayout};
pub use locator::{locate, GridLocation, ParticipantSlot};

/// A spreadsheet export as rows of text cells.
///
/// Rows may be jagged; a missing cell and an empty cell are treated alike by
/// every reader. The grid is read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a grid from anything yielding rows of string-like cells.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Raw cell text, `None` when the row or column does not exist.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Trimmed cell text, `None` when the cell is absent or blank.
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// BLAKE3 content hash, stable for identical cell contents.
    ///
    /// Cells and rows are delimited with ASCII unit/record separators so that
    /// `["ab", "c"]` and `["a", "bc"]` hash differently.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for row in &self.rows {
            for cell in row {
                hasher.update(cell.as_bytes());
                hasher.update(&[0x1f]);
            }
            hasher.update(&[0x1e]);
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl From<Vec<Vec<String>>> for RawGrid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
