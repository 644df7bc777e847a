//! Leaderboard summary — the ranked participants plus aggregate statistics.
//!
//! This is the entire surface exposed to presentation layers. It is rebuilt
//! from scratch on every ingest and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::holding::StockHolding;
use super::participant::{Participant, ParticipantId};

/// Cross-participant aggregates. Every participant or holding here is a copy
/// of an entry already present in the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub top_performer: Participant,
    pub bottom_performer: Participant,
    /// `None` when no participant holds any stock.
    pub top_stock: Option<StockHolding>,
    pub worst_stock: Option<StockHolding>,
    pub top10_stocks: Vec<StockHolding>,
    pub worst10_stocks: Vec<StockHolding>,
    pub day_mover: Participant,
    pub average_return_pct: f64,
    pub total_portfolio_value: f64,
    pub total_pnl: f64,
    pub winners_count: usize,
    pub losers_count: usize,
}

/// One bar of the per-participant return chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    pub return_pct: f64,
    pub value: f64,
    pub pnl: f64,
}

/// Output of one ingestion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    /// Ranked best-first; ranks are `1..=n`.
    pub participants: Vec<Participant>,
    /// `None` when there are no participants.
    pub statistics: Option<Statistics>,
}

impl LeaderboardSummary {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Participants whose name contains `query` (case-insensitive), in rank order.
    /// An empty query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.matches_name(query))
            .collect()
    }

    /// Return/value/PnL series in rank order.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.participants
            .iter()
            .map(|p| ChartPoint {
                name: p.name.clone(),
                return_pct: p.total_return_pct,
                value: p.portfolio_value,
                pnl: p.total_pnl,
            })
            .collect()
    }
}
