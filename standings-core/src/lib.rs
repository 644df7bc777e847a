//! Standings Core — sheet ingestion, leaderboard ranking, and statistics for a
//! stock-picking competition.
//!
//! This crate turns a loosely structured spreadsheet export into a typed model:
//! - Domain types (participants, stock holdings, statistics, summaries)
//! - Cell parsing with silent per-field fallbacks
//! - Layout-driven location of participant columns and detail blocks
//! - Per-participant extraction from the detail block or the summary fallback
//! - Dense leaderboard ranking by total return
//! - Cross-participant statistics with per-symbol deduplication
//! - Grid providers (published sheet URL, CSV file) and a refresh board that
//!   keeps the last good snapshot

pub mod config;
pub mod domain;
pub mod grid;
pub mod ingest;
pub mod leaderboard;
pub mod refresh;
pub mod source;
pub mod stats;

pub use config::{ConfigError, SourceConfig, StandingsConfig};
pub use domain::{
    ChartPoint, HoldingsSource, LeaderboardSummary, Participant, ParticipantId, Statistics,
    StockHolding, STARTING_CAPITAL,
};
pub use grid::{AliasTable, GridLayout, RawGrid};
pub use ingest::{ingest, ingest_with_layout, IngestError, Ingestor};
pub use leaderboard::rank_participants;
pub use refresh::{Board, RefreshOutcome, Snapshot};
pub use source::{AcquisitionError, CsvFileProvider, GridProvider, SheetProvider, StaticGridProvider};
pub use stats::compute_statistics;
