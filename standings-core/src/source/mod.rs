//! Grid acquisition — providers that produce a [`RawGrid`] for ingestion.
//!
//! The GridProvider trait abstracts over where a sheet export comes from (a
//! published CSV URL, a file on disk, an in-memory fixture) so refreshes can
//! be driven and tested the same way. Providers never retry; every failure is
//! surfaced as one [`AcquisitionError`].

pub mod csv;
pub mod sheet;

pub use self::csv::{parse_csv, CsvFileProvider, StaticGridProvider};
pub use sheet::SheetProvider;

use thiserror::Error;

use crate::grid::RawGrid;

/// The grid could not be obtained or could not be read as a grid.
///
/// Variants keep the cause for display; callers treat them all as a failed
/// acquisition.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("sheet request failed with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("could not parse sheet as CSV: {0}")]
    Parse(String),

    #[error("could not read {path}: {message}")]
    Io { path: String, message: String },
}

/// A source of raw grids.
pub trait GridProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch a fresh grid snapshot.
    fn fetch_grid(&self) -> Result<RawGrid, AcquisitionError>;
}
