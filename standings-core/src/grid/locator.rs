//! Grid locator — participant columns and detail block start rows.

use std::collections::BTreeMap;
use tracing::debug;

use super::layout::GridLayout;
use super::RawGrid;

/// A non-blank participant name and the header column it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSlot {
    pub name: String,
    pub column: usize,
}

/// Result of scanning a grid for participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLocation {
    /// Header order, blanks removed.
    pub participants: Vec<ParticipantSlot>,
    /// Participant name -> row of that participant's detail block.
    pub detail_start_rows: BTreeMap<String, usize>,
}

impl GridLocation {
    pub fn participant_names(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn detail_start(&self, name: &str) -> Option<usize> {
        self.detail_start_rows.get(name).copied()
    }
}

/// Read participant names from the header row and find each one's detail block.
///
/// Every row below the header is checked once; its name-column text is
/// compared against each participant, alias spellings included. When several
/// rows match the same participant the last one wins. The header row itself
/// never counts as a detail block.
pub fn locate(grid: &RawGrid, layout: &GridLayout) -> GridLocation {
    let participants: Vec<ParticipantSlot> = layout
        .participant_columns()
        .filter_map(|column| {
            grid.text(layout.header_row, column).map(|name| ParticipantSlot {
                name: name.to_string(),
                column,
            })
        })
        .collect();

    let mut detail_start_rows = BTreeMap::new();
    for row in (layout.header_row + 1)..grid.row_count() {
        let Some(first) = grid.text(row, layout.detail.name_column) else {
            continue;
        };
        for slot in &participants {
            if layout.aliases.same_person(&slot.name, first) {
                detail_start_rows.insert(slot.name.clone(), row);
            }
        }
    }

    debug!(
        participants = participants.len(),
        detail_blocks = detail_start_rows.len(),
        "located participants"
    );

    GridLocation {
        participants,
        detail_start_rows,
    }
}
