//! StockHolding — one stock pick owned by a participant.

use serde::{Deserialize, Serialize};

use super::Symbol;

/// A single stock pick.
///
/// `return_pct` is a percentage (`12.5` means +12.5%), not a fraction.
/// Holdings built from the summary block carry zero prices and an evenly
/// distributed share of the portfolio return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    pub symbol: Symbol,
    pub buy_price: f64,
    pub current_price: f64,
    pub return_pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StockHolding {
    /// Holding with no per-stock price data, as produced by the summary fallback.
    pub fn synthetic(symbol: impl Into<Symbol>, return_pct: f64) -> Self {
        Self {
            symbol: symbol.into(),
            buy_price: 0.0,
            current_price: 0.0,
            return_pct,
            reason: None,
        }
    }

    /// Whether real buy/current prices are known for this holding.
    pub fn has_prices(&self) -> bool {
        self.buy_price != 0.0 || self.current_price != 0.0
    }
}
