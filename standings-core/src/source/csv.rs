//! CSV text and file providers.

use std::path::{Path, PathBuf};

use super::{AcquisitionError, GridProvider};
use crate::grid::RawGrid;

/// Parse CSV text into a grid.
///
/// No header row is assumed, records may have differing lengths, and
/// completely empty lines are skipped (so row indices count non-empty lines).
/// Cells are kept verbatim.
pub fn parse_csv(text: &str) -> Result<RawGrid, AcquisitionError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AcquisitionError::Parse(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawGrid::new(rows))
}

impl RawGrid {
    /// Parse CSV text; see [`parse_csv`].
    pub fn from_csv_str(text: &str) -> Result<Self, AcquisitionError> {
        parse_csv(text)
    }
}

/// Reads a sheet export saved as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvFileProvider {
    path: PathBuf,
    name: String,
}

impl CsvFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridProvider for CsvFileProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_grid(&self) -> Result<RawGrid, AcquisitionError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| AcquisitionError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        parse_csv(&text)
    }
}

/// Serves a fixed grid. Useful for fixtures and replaying a saved snapshot.
#[derive(Debug, Clone)]
pub struct StaticGridProvider {
    grid: RawGrid,
}

impl StaticGridProvider {
    pub fn new(grid: RawGrid) -> Self {
        Self { grid }
    }
}

impl GridProvider for StaticGridProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_grid(&self) -> Result<RawGrid, AcquisitionError> {
        Ok(self.grid.clone())
    }
}
