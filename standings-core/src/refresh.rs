//! Refresh board — keeps the last successfully ingested snapshot.
//!
//! A refresh fetches a fresh grid, ingests it, and only then replaces the
//! current snapshot. A failed refresh leaves the previous snapshot in place so
//! callers can keep showing it. `refresh` takes `&mut self`, so one board
//! cannot run two refreshes at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::LeaderboardSummary;
use crate::ingest::{IngestError, Ingestor};
use crate::source::GridProvider;

/// One successful ingestion and the grid it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub summary: LeaderboardSummary,
    /// BLAKE3 hash of the grid contents.
    pub grid_hash: String,
    pub refreshed_at: DateTime<Utc>,
}

/// What a successful refresh did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No previous snapshot existed.
    Initial,
    /// The grid content differs from the previous snapshot's.
    Changed,
    /// Same grid content as before; the snapshot was still replaced.
    Unchanged,
}

/// Holds the latest good snapshot.
#[derive(Debug, Default)]
pub struct Board {
    ingestor: Ingestor,
    latest: Option<Snapshot>,
}

impl Board {
    pub fn new(ingestor: Ingestor) -> Self {
        Self {
            ingestor,
            latest: None,
        }
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// Fetch and ingest a new grid. On error the current snapshot is kept.
    pub fn refresh(&mut self, provider: &dyn GridProvider) -> Result<RefreshOutcome, IngestError> {
        let result = provider
            .fetch_grid()
            .map_err(IngestError::from)
            .and_then(|grid| {
                let summary = self.ingestor.ingest(&grid)?;
                Ok((summary, grid.content_hash()))
            });

        let (summary, grid_hash) = match result {
            Ok(ok) => ok,
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    error = %e,
                    kept_previous = self.latest.is_some(),
                    "refresh failed"
                );
                return Err(e);
            }
        };

        let outcome = match &self.latest {
            None => RefreshOutcome::Initial,
            Some(prev) if prev.grid_hash == grid_hash => RefreshOutcome::Unchanged,
            Some(_) => RefreshOutcome::Changed,
        };

        info!(
            provider = provider.name(),
            participants = summary.len(),
            outcome = ?outcome,
            "refreshed board"
        );

        self.latest = Some(Snapshot {
            summary,
            grid_hash,
            refreshed_at: Utc::now(),
        });
        Ok(outcome)
    }
}
