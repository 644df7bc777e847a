//! Participant — one competitor column of the sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::holding::StockHolding;

/// Fixed starting capital of every participant.
///
/// The PnL identity `total_pnl == portfolio_value - STARTING_CAPITAL` must hold
/// for every participant.
pub const STARTING_CAPITAL: f64 = 10_000.0;

/// Deterministic participant ID derived from the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    /// Lower-cased name with each whitespace run collapsed to a single `-`.
    pub fn from_name(name: &str) -> Self {
        let id = name
            .split_whitespace()
            .map(|part| part.to_lowercase())
            .collect::<Vec<_>>()
            .join("-");
        Self(id)
    }

    /// Disambiguated form used for the `n`-th participant sharing a name (`n >= 2`).
    pub fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which block of the sheet a participant's holdings were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HoldingsSource {
    /// Per-stock rows of a detail block starting at `start_row`.
    #[serde(rename_all = "camelCase")]
    DetailBlock { start_row: usize },
    /// Symbol-only summary rows; returns are distributed evenly.
    SummaryBlock,
}

/// A competitor with portfolio aggregates and holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Header column the participant was read from.
    pub column: usize,
    pub total_return_pct: f64,
    pub day_change_pct: f64,
    pub portfolio_value: f64,
    pub total_pnl: f64,
    pub holdings: Vec<StockHolding>,
    pub source: HoldingsSource,
    /// 1-based leaderboard position; `None` until ranked.
    pub rank: Option<usize>,
}

impl Participant {
    pub fn is_winner(&self) -> bool {
        self.total_return_pct > 0.0
    }

    pub fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Case-insensitive substring match on the display name.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_lowercases_and_collapses_whitespace() {
        assert_eq!(ParticipantId::from_name("Alice").as_str(), "alice");
        assert_eq!(ParticipantId::from_name("Mary  Jo\tSmith").as_str(), "mary-jo-smith");
        assert_eq!(ParticipantId::from_name("  Bob ").as_str(), "bob");
    }

    #[test]
    fn id_suffix() {
        let id = ParticipantId::from_name("Sam");
        assert_eq!(id.with_suffix(2).as_str(), "sam-2");
    }

    #[test]
    fn source_serializes_tagged() {
        let json = serde_json::to_string(&HoldingsSource::DetailBlock { start_row: 20 }).unwrap();
        assert_eq!(json, r#"{"kind":"detailBlock","startRow":20}"#);
        let json = serde_json::to_string(&HoldingsSource::SummaryBlock).unwrap();
        assert_eq!(json, r#"{"kind":"summaryBlock"}"#);
    }
}
