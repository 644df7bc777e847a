//! Ingestion entry point: raw grid in, ranked leaderboard summary out.
//!
//! Pipeline: locate participants -> extract each one -> rank -> statistics.
//! Every pass is a pure function of the grid, so ingesting the same grid twice
//! yields equal summaries.

use thiserror::Error;
use tracing::info;

use crate::domain::LeaderboardSummary;
use crate::grid::{extract_participants, locate, GridLayout, RawGrid};
use crate::leaderboard::rank_participants;
use crate::source::AcquisitionError;
use crate::stats::compute_statistics;

/// Why an ingestion produced no result. There is no partial success.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not acquire sheet: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("sheet has {rows} rows but the summary block needs at least {required}")]
    Structural { rows: usize, required: usize },
}

/// Ingests grids using a fixed layout.
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    layout: GridLayout,
}

impl Ingestor {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Build a summary from one grid snapshot.
    pub fn ingest(&self, grid: &RawGrid) -> Result<LeaderboardSummary, IngestError> {
        let required = self.layout.min_rows();
        if grid.row_count() < required {
            return Err(IngestError::Structural {
                rows: grid.row_count(),
                required,
            });
        }

        let location = locate(grid, &self.layout);
        let participants = extract_participants(grid, &self.layout, &location);
        let ranked = rank_participants(participants);
        let statistics = compute_statistics(&ranked);

        info!(
            participants = ranked.len(),
            detail_blocks = location.detail_start_rows.len(),
            "ingested sheet"
        );

        Ok(LeaderboardSummary {
            participants: ranked,
            statistics,
        })
    }
}

/// Ingest with the default sheet layout.
pub fn ingest(grid: &RawGrid) -> Result<LeaderboardSummary, IngestError> {
    Ingestor::default().ingest(grid)
}

/// Ingest with a custom layout.
pub fn ingest_with_layout(
    grid: &RawGrid,
    layout: &GridLayout,
) -> Result<LeaderboardSummary, IngestError> {
    Ingestor::new(layout.clone()).ingest(grid)
}
