//! Statistics engine — cross-participant aggregates over a ranked list.

use crate::domain::{Participant, Statistics, StockHolding};

/// Length of the top/worst distinct-stock lists.
pub const STOCK_LIST_LEN: usize = 10;

/// Compute aggregates for a ranked participant list.
///
/// Returns `None` for an empty list.
pub fn compute_statistics(ranked: &[Participant]) -> Option<Statistics> {
    let top_performer = ranked.first()?.clone();
    let bottom_performer = ranked.last()?.clone();

    let all_holdings: Vec<&StockHolding> = ranked.iter().flat_map(|p| &p.holdings).collect();

    let top_stock = extreme_by(&all_holdings, |candidate, best| candidate > best).cloned();
    let worst_stock = extreme_by(&all_holdings, |candidate, best| candidate < best).cloned();

    let distinct = distinct_by_symbol(&all_holdings);
    let top10_stocks: Vec<StockHolding> = distinct.iter().take(STOCK_LIST_LEN).cloned().collect();
    let worst10_stocks: Vec<StockHolding> = distinct
        .iter()
        .rev()
        .take(STOCK_LIST_LEN)
        .cloned()
        .collect();

    let day_mover = ranked
        .iter()
        .fold(None::<&Participant>, |best, p| match best {
            Some(b) if p.day_change_pct <= b.day_change_pct => Some(b),
            _ => Some(p),
        })?
        .clone();

    let n = ranked.len();
    let average_return_pct = ranked.iter().map(|p| p.total_return_pct).sum::<f64>() / n as f64;
    let total_portfolio_value = ranked.iter().map(|p| p.portfolio_value).sum();
    let total_pnl = ranked.iter().map(|p| p.total_pnl).sum();
    let winners_count = ranked.iter().filter(|p| p.is_winner()).count();

    Some(Statistics {
        top_performer,
        bottom_performer,
        top_stock,
        worst_stock,
        top10_stocks,
        worst10_stocks,
        day_mover,
        average_return_pct,
        total_portfolio_value,
        total_pnl,
        winners_count,
        losers_count: n - winners_count,
    })
}

/// First holding whose return beats every earlier one under `better`.
fn extreme_by<'a>(
    holdings: &[&'a StockHolding],
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a StockHolding> {
    holdings.iter().copied().fold(None, |best, h| match best {
        Some(b) if !better(h.return_pct, b.return_pct) => Some(b),
        _ => Some(h),
    })
}

/// One holding per symbol, sorted by return descending.
///
/// When a symbol recurs, the instance with the strictly higher return replaces
/// the kept one and moves to the back of the insertion order; equal returns
/// keep the earlier instance. Equal returns in the final list keep insertion
/// order.
pub fn distinct_by_symbol(holdings: &[&StockHolding]) -> Vec<StockHolding> {
    let mut distinct: Vec<StockHolding> = Vec::new();

    for &h in holdings {
        match distinct.iter().position(|d| d.symbol == h.symbol) {
            Some(idx) if h.return_pct > distinct[idx].return_pct => {
                distinct.remove(idx);
                distinct.push(h.clone());
            }
            Some(_) => {}
            None => distinct.push(h.clone()),
        }
    }

    distinct.sort_by(|a, b| {
        b.return_pct
            .partial_cmp(&a.return_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    distinct
}
