//! Domain types shared by the ingestion engine and presentation layers.

pub mod holding;
pub mod participant;
pub mod summary;

pub use holding::StockHolding;
pub use participant::{HoldingsSource, Participant, ParticipantId, STARTING_CAPITAL};
pub use summary::{ChartPoint, LeaderboardSummary, Statistics};

/// Symbol type alias
pub type Symbol = String;
