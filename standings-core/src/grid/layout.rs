//! Sheet layout — every fixed row/column position of the two-block convention.
//!
//! The sheet carries a compact summary block under the header row (symbols,
//! then value / day change / total return) and, optionally, one detail block
//! per participant further down, introduced by a row whose first cell is the
//! participant's name. All positions are absolute 0-based indices except the
//! detail stock offsets, which are relative to the detail block's name row.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Complete description of where data lives in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Row holding participant names.
    pub header_row: usize,
    /// Column to the left of the first participant column.
    pub label_column: usize,
    /// Number of participant slots after the label column.
    pub max_participants: usize,
    pub summary: SummaryLayout,
    pub detail: DetailLayout,
    pub aliases: AliasTable,
}

/// Summary block rows, read at each participant's column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryLayout {
    pub first_symbol_row: usize,
    pub symbol_rows: usize,
    pub portfolio_value_row: usize,
    pub day_change_row: usize,
    pub total_return_row: usize,
    /// Symbol placeholder for a pick not yet made.
    pub placeholder_symbol: String,
}

/// Detail block columns and row offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailLayout {
    /// Column scanned for participant names.
    pub name_column: usize,
    /// First stock row, relative to the name row.
    pub first_stock_offset: usize,
    /// Upper bound on stock rows read per block.
    pub max_stock_rows: usize,
    pub symbol_column: usize,
    pub buy_price_column: usize,
    pub current_price_column: usize,
    pub return_column: usize,
    pub reason_column: usize,
    /// Terminates a block (compared case-insensitively).
    pub totals_sentinel: String,
    /// Column-header row text; terminates a block.
    pub header_sentinel: String,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            header_row: 0,
            label_column: 0,
            max_participants: 18,
            summary: SummaryLayout::default(),
            detail: DetailLayout::default(),
            aliases: AliasTable::default(),
        }
    }
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self {
            first_symbol_row: 1,
            symbol_rows: 10,
            portfolio_value_row: 11,
            day_change_row: 12,
            total_return_row: 13,
            placeholder_symbol: "TBD".into(),
        }
    }
}

impl Default for DetailLayout {
    fn default() -> Self {
        Self {
            name_column: 0,
            first_stock_offset: 2,
            max_stock_rows: 10,
            symbol_column: 0,
            buy_price_column: 2,
            current_price_column: 3,
            return_column: 9,
            reason_column: 11,
            totals_sentinel: "TOTALS".into(),
            header_sentinel: "Symbol".into(),
        }
    }
}

impl GridLayout {
    /// Columns that may hold a participant name.
    pub fn participant_columns(&self) -> Range<usize> {
        let first = self.label_column + 1;
        first..first + self.max_participants
    }

    /// Rows needed for the header and the whole summary block.
    pub fn min_rows(&self) -> usize {
        let s = &self.summary;
        [
            self.header_row,
            s.first_symbol_row + s.symbol_rows.saturating_sub(1),
            s.portfolio_value_row,
            s.day_change_row,
            s.total_return_row,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

impl SummaryLayout {
    pub fn symbol_row_range(&self) -> Range<usize> {
        self.first_symbol_row..self.first_symbol_row + self.symbol_rows
    }
}

impl DetailLayout {
    /// Whether a stock-row symbol ends the detail block.
    pub fn is_terminator(&self, symbol: &str) -> bool {
        symbol.eq_ignore_ascii_case(&self.totals_sentinel) || symbol == self.header_sentinel
    }
}

/// Accepted alternate spellings of participant names, keyed by the name as it
/// appears in the header row.
///
/// A detail block may be introduced by a different spelling than the header
/// (a legal name versus a display name). Two names refer to the same person
/// when they are equal or belong to the same alias group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable(BTreeMap<String, Vec<String>>);

impl Default for AliasTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("Lisa", "Lisa Sweeter Hanson");
        table
    }
}

impl AliasTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Register `spelling` as another way of writing `canonical`.
    pub fn insert(&mut self, canonical: impl Into<String>, spelling: impl Into<String>) {
        let spellings = self.0.entry(canonical.into()).or_default();
        let spelling = spelling.into();
        if !spellings.contains(&spelling) {
            spellings.push(spelling);
        }
    }

    /// Spellings accepted for `canonical`, excluding the canonical form itself.
    pub fn spellings(&self, canonical: &str) -> &[String] {
        self.0.get(canonical).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `a` and `b` name the same participant.
    pub fn same_person(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        self.0.iter().any(|(canonical, spellings)| {
            let in_group = |name: &str| name == canonical || spellings.iter().any(|s| s == name);
            in_group(a) && in_group(b)
        })
    }
}
