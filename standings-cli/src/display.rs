//! Plain-text rendering of leaderboards and statistics.

use std::fmt::Write;

use standings_core::{HoldingsSource, Participant, Statistics, StockHolding};

/// `+10.00%` / `-5.00%`.
pub fn signed_pct(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// Dollar amount in thousands, e.g. `$40.8K`.
pub fn thousands(value: f64) -> String {
    format!("${:.1}K", value / 1000.0)
}

/// Leaderboard table, one line per participant; optional holdings underneath.
pub fn render_leaderboard(participants: &[&Participant], show_holdings: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:>10} {:>9} {:>12} {:>11}",
        "Rank", "Name", "Return", "Day", "Value", "P&L"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));

    for p in participants {
        let rank = p.rank.map(|r| r.to_string()).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:>10} {:>9} {:>12.2} {:>+11.2}",
            rank,
            p.name,
            signed_pct(p.total_return_pct, 2),
            signed_pct(p.day_change_pct, 2),
            p.portfolio_value,
            p.total_pnl,
        );
        if show_holdings {
            out.push_str(&render_holdings(p));
        }
    }
    out
}

fn render_holdings(p: &Participant) -> String {
    let mut out = String::new();
    if p.holdings.is_empty() {
        let _ = writeln!(out, "        (no picks)");
        return out;
    }
    for h in &p.holdings {
        let prices = match p.source {
            HoldingsSource::DetailBlock { .. } => {
                format!("${:.2} -> ${:.2}", h.buy_price, h.current_price)
            }
            HoldingsSource::SummaryBlock => "(no price data)".to_string(),
        };
        let _ = write!(
            out,
            "        {:<8} {:>9}  {}",
            h.symbol,
            signed_pct(h.return_pct, 2),
            prices
        );
        if let Some(reason) = &h.reason {
            let _ = write!(out, "  {reason}");
        }
        out.push('\n');
    }
    out
}

/// Headline statistics block.
pub fn render_statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Leader:        {} ({} return)",
        stats.top_performer.name,
        signed_pct(stats.top_performer.total_return_pct, 2)
    );
    let _ = writeln!(
        out,
        "Last place:    {} ({} return)",
        stats.bottom_performer.name,
        signed_pct(stats.bottom_performer.total_return_pct, 2)
    );
    if let Some(top) = &stats.top_stock {
        let _ = writeln!(out, "Top stock:     {} ({})", top.symbol, signed_pct(top.return_pct, 2));
    }
    if let Some(worst) = &stats.worst_stock {
        let _ = writeln!(
            out,
            "Worst stock:   {} ({})",
            worst.symbol,
            signed_pct(worst.return_pct, 2)
        );
    }
    let _ = writeln!(
        out,
        "Day mover:     {} ({} today)",
        stats.day_mover.name,
        signed_pct(stats.day_mover.day_change_pct, 2)
    );
    let _ = writeln!(out, "Avg return:    {}", signed_pct(stats.average_return_pct, 2));
    let _ = writeln!(out, "Total value:   {}", thousands(stats.total_portfolio_value));
    let _ = writeln!(out, "Total P&L:     {}", thousands(stats.total_pnl));
    let _ = writeln!(
        out,
        "Profitable:    {}   In loss: {}",
        stats.winners_count, stats.losers_count
    );
    out
}

/// Top and worst distinct-stock lists side by side.
pub fn render_stock_lists(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<24}{}", "Top stocks", "Worst stocks");
    let rows = stats.top10_stocks.len().max(stats.worst10_stocks.len());
    for i in 0..rows {
        let left = stats.top10_stocks.get(i).map(stock_cell).unwrap_or_default();
        let right = stats.worst10_stocks.get(i).map(stock_cell).unwrap_or_default();
        let _ = writeln!(out, "{:>2}. {:<20}{}", i + 1, left, right);
    }
    out
}

fn stock_cell(h: &StockHolding) -> String {
    format!("{:<8} {:>8}", h.symbol, signed_pct(h.return_pct, 1))
}
