//! Participant extraction — one participant per located header column.
//!
//! Portfolio aggregates always come from the summary block. Holdings come from
//! exactly one of two places, chosen per participant:
//! - the detail block, when the locator found one (real prices and returns)
//! - otherwise the summary symbol rows, with the portfolio return split evenly
//!   across the named symbols
//!
//! Extraction never fails; malformed cells degrade to their defaults.

use std::collections::HashSet;
use tracing::{debug, trace};

use super::cells::{parse_currency, parse_percent, DEFAULT_PORTFOLIO_VALUE, DEFAULT_PRICE};
use super::layout::{DetailLayout, GridLayout, SummaryLayout};
use super::locator::{GridLocation, ParticipantSlot};
use super::RawGrid;
use crate::domain::{HoldingsSource, Participant, ParticipantId, StockHolding, STARTING_CAPITAL};

/// Extract every located participant in header order, with unique IDs.
///
/// Participants sharing a name get `-2`, `-3`, ... suffixes in header order.
pub fn extract_participants(
    grid: &RawGrid,
    layout: &GridLayout,
    location: &GridLocation,
) -> Vec<Participant> {
    let mut used_ids = HashSet::new();

    location
        .participants
        .iter()
        .map(|slot| {
            let mut participant =
                extract_participant(grid, layout, slot, location.detail_start(&slot.name));
            let base = participant.id.clone();
            let mut n = 1;
            while !used_ids.insert(participant.id.clone()) {
                n += 1;
                participant.id = base.with_suffix(n);
            }
            participant
        })
        .collect()
}

/// Extract a single participant from its column.
pub fn extract_participant(
    grid: &RawGrid,
    layout: &GridLayout,
    slot: &ParticipantSlot,
    detail_start: Option<usize>,
) -> Participant {
    let summary = &layout.summary;
    let col = slot.column;

    let portfolio_value = parse_currency(
        grid.cell(summary.portfolio_value_row, col),
        DEFAULT_PORTFOLIO_VALUE,
    );
    let day_change_pct = parse_percent(grid.cell(summary.day_change_row, col));
    let total_return_pct = parse_percent(grid.cell(summary.total_return_row, col));

    let source = match detail_start {
        Some(start_row) => HoldingsSource::DetailBlock { start_row },
        None => HoldingsSource::SummaryBlock,
    };

    let holdings = match source {
        HoldingsSource::DetailBlock { start_row } => {
            read_detail_holdings(grid, &layout.detail, start_row)
        }
        HoldingsSource::SummaryBlock => {
            let symbols = read_summary_symbols(grid, summary, col);
            distribute_return(symbols, total_return_pct)
        }
    };

    debug!(
        name = %slot.name,
        column = col,
        holdings = holdings.len(),
        source = ?source,
        "extracted participant"
    );

    Participant {
        id: ParticipantId::from_name(&slot.name),
        name: slot.name.clone(),
        column: col,
        total_return_pct,
        day_change_pct,
        portfolio_value,
        total_pnl: portfolio_value - STARTING_CAPITAL,
        holdings,
        source,
        rank: None,
    }
}

/// Read consecutive stock rows below a detail block's name row.
///
/// Stops at the first blank symbol, sentinel row, missing row, or after
/// `max_stock_rows` rows.
fn read_detail_holdings(grid: &RawGrid, detail: &DetailLayout, start_row: usize) -> Vec<StockHolding> {
    let first = start_row + detail.first_stock_offset;
    let mut holdings = Vec::new();

    for row in first..first + detail.max_stock_rows {
        let Some(symbol) = grid.text(row, detail.symbol_column) else {
            trace!(row, "detail block ended at blank symbol");
            break;
        };
        if detail.is_terminator(symbol) {
            trace!(row, symbol, "detail block ended at sentinel");
            break;
        }

        holdings.push(StockHolding {
            symbol: symbol.to_string(),
            buy_price: parse_currency(grid.cell(row, detail.buy_price_column), DEFAULT_PRICE),
            current_price: parse_currency(
                grid.cell(row, detail.current_price_column),
                DEFAULT_PRICE,
            ),
            return_pct: parse_percent(grid.cell(row, detail.return_column)),
            reason: grid.text(row, detail.reason_column).map(str::to_string),
        });
    }

    holdings
}

/// Symbols named in the summary block for one column, placeholders removed.
fn read_summary_symbols(grid: &RawGrid, summary: &SummaryLayout, col: usize) -> Vec<String> {
    summary
        .symbol_row_range()
        .filter_map(|row| grid.text(row, col))
        .filter(|symbol| *symbol != summary.placeholder_symbol)
        .map(str::to_string)
        .collect()
}

/// One synthetic holding per symbol, each carrying an equal share of the
/// portfolio return.
fn distribute_return(symbols: Vec<String>, total_return_pct: f64) -> Vec<StockHolding> {
    if symbols.is_empty() {
        return Vec::new();
    }
    let share = total_return_pct / symbols.len() as f64;
    symbols
        .into_iter()
        .map(|symbol| StockHolding::synthetic(symbol, share))
        .collect()
}
