//! Export — JSON and CSV renderings of a standings snapshot.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use standings_core::{HoldingsSource, LeaderboardSummary, Snapshot};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a snapshot (summary, grid hash, refresh time) to pretty JSON.
pub fn export_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot to JSON")
}

// ─── CSV export ─────────────────────────────────────────────────────

/// One row per ranked participant.
///
/// Columns: rank, id, name, total_return_pct, day_change_pct,
/// portfolio_value, total_pnl, holdings_source, picks
pub fn export_standings_csv(summary: &LeaderboardSummary) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "rank",
        "id",
        "name",
        "total_return_pct",
        "day_change_pct",
        "portfolio_value",
        "total_pnl",
        "holdings_source",
        "picks",
    ])?;

    for p in &summary.participants {
        wtr.write_record([
            &p.rank.map(|r| r.to_string()).unwrap_or_default(),
            p.id.as_str(),
            &p.name,
            &format!("{:.4}", p.total_return_pct),
            &format!("{:.4}", p.day_change_pct),
            &format!("{:.2}", p.portfolio_value),
            &format!("{:.2}", p.total_pnl),
            source_label(&p.source),
            &p.holdings.len().to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// One row per holding, in leaderboard order.
///
/// Columns: participant_id, participant, symbol, buy_price, current_price,
/// return_pct, reason. Price columns are empty for summary-derived holdings.
pub fn export_holdings_csv(summary: &LeaderboardSummary) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "participant_id",
        "participant",
        "symbol",
        "buy_price",
        "current_price",
        "return_pct",
        "reason",
    ])?;

    for p in &summary.participants {
        for h in &p.holdings {
            let (buy, current) = if h.has_prices() {
                (format!("{:.2}", h.buy_price), format!("{:.2}", h.current_price))
            } else {
                (String::new(), String::new())
            };
            wtr.write_record([
                p.id.as_str(),
                &p.name,
                &h.symbol,
                &buy,
                &current,
                &format!("{:.4}", h.return_pct),
                h.reason.as_deref().unwrap_or(""),
            ])?;
        }
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

fn source_label(source: &HoldingsSource) -> &'static str {
    match source {
        HoldingsSource::DetailBlock { .. } => "detail",
        HoldingsSource::SummaryBlock => "summary",
    }
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Write `snapshot.json`, `standings.csv`, and `holdings.csv` into a
/// timestamped directory under `output_dir`. Returns the created directory.
pub fn save_exports(snapshot: &Snapshot, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!("standings_{}", snapshot.refreshed_at.format("%Y%m%d_%H%M%S"));
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create export dir: {}", run_dir.display()))?;

    std::fs::write(run_dir.join("snapshot.json"), export_json(snapshot)?)?;
    std::fs::write(
        run_dir.join("standings.csv"),
        export_standings_csv(&snapshot.summary)?,
    )?;
    std::fs::write(
        run_dir.join("holdings.csv"),
        export_holdings_csv(&snapshot.summary)?,
    )?;

    Ok(run_dir)
}

// ─── Tests ──────────────────────────────────────────────────────────
