//! End-to-end ingestion scenarios.
//!
//! Covers the fixed-layout summary fallback, detail blocks (including an
//! aliased name), the structural row minimum, and statistics over a realistic
//! competition export.

use std::path::PathBuf;

use standings_core::{
    ingest, CsvFileProvider, GridProvider, HoldingsSource, IngestError, LeaderboardSummary,
    ParticipantId, RawGrid,
};

// ─── Shared helpers ──────────────────────────────────────────────────

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_fixture() -> LeaderboardSummary {
    let grid = CsvFileProvider::new(fixture_path("competition.csv"))
        .fetch_grid()
        .unwrap();
    ingest(&grid).unwrap()
}

/// 14-row summary-only grid with the given header cells; cells set via `set`.
fn blank_grid(header: &[&str]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![String::new(); header.len()]; 14];
    rows[0] = header.iter().map(|s| s.to_string()).collect();
    rows
}

fn set(rows: &mut [Vec<String>], row: usize, col: usize, value: &str) {
    if rows[row].len() <= col {
        rows[row].resize(col + 1, String::new());
    }
    rows[row][col] = value.to_string();
}

fn symbols(summary: &LeaderboardSummary, name: &str) -> Vec<String> {
    summary
        .participants
        .iter()
        .find(|p| p.name == name)
        .unwrap()
        .holdings
        .iter()
        .map(|h| h.symbol.clone())
        .collect()
}

// ─── Sheet scenarios ─────────────────────────────────────────────────

#[test]
fn two_participant_summary_only_grid() {
    let mut rows = blank_grid(&["", "Alice", "Bob"]);
    set(&mut rows, 1, 1, "AAA");
    set(&mut rows, 2, 1, "BBB");
    set(&mut rows, 11, 1, "$11,000");
    set(&mut rows, 13, 1, "10%");
    set(&mut rows, 11, 2, "$9,500");
    set(&mut rows, 13, 2, "-5%");

    let summary = ingest(&RawGrid::new(rows)).unwrap();

    let order: Vec<_> = summary
        .participants
        .iter()
        .map(|p| (p.name.as_str(), p.rank, p.total_return_pct))
        .collect();
    assert_eq!(order, vec![("Alice", Some(1), 10.0), ("Bob", Some(2), -5.0)]);

    let alice = &summary.participants[0];
    assert_eq!(alice.holdings.len(), 2);
    assert!(alice.holdings.iter().all(|h| h.return_pct == 5.0));
    assert_eq!(alice.total_pnl, 1_000.0);
    assert_eq!(summary.participants[1].total_pnl, -500.0);

    let stats = summary.statistics.unwrap();
    assert_eq!(stats.winners_count, 1);
    assert_eq!(stats.losers_count, 1);
    assert_eq!(stats.average_return_pct, 2.5);
}

#[test]
fn detail_block_excludes_totals_row() {
    let mut rows = blank_grid(&["", "Alice"]);
    set(&mut rows, 1, 1, "IGNORED");
    rows.push(vec!["Alice".into()]);
    rows.push(vec!["Symbol".into()]);
    let mut aaa = vec![String::new(); 12];
    aaa[0] = "AAA".into();
    aaa[9] = "12%".into();
    rows.push(aaa);
    let mut bbb = vec![String::new(); 12];
    bbb[0] = "BBB".into();
    bbb[9] = "-2%".into();
    rows.push(bbb);
    rows.push(vec!["TOTALS".into()]);

    let summary = ingest(&RawGrid::new(rows)).unwrap();
    let alice = &summary.participants[0];
    assert_eq!(alice.source, HoldingsSource::DetailBlock { start_row: 14 });
    assert_eq!(symbols(&summary, "Alice"), vec!["AAA", "BBB"]);
}

#[test]
fn shared_symbol_keeps_best_return() {
    let mut rows = blank_grid(&["", "P1", "P2"]);
    set(&mut rows, 1, 1, "XYZ");
    set(&mut rows, 13, 1, "8%");
    set(&mut rows, 1, 2, "XYZ");
    set(&mut rows, 13, 2, "15%");

    let stats = ingest(&RawGrid::new(rows)).unwrap().statistics.unwrap();
    let xyz: Vec<_> = stats
        .top10_stocks
        .iter()
        .filter(|h| h.symbol == "XYZ")
        .collect();
    assert_eq!(xyz.len(), 1);
    assert_eq!(xyz[0].return_pct, 15.0);
    assert_eq!(stats.worst10_stocks.len(), 1);
}

#[test]
fn fourteen_rows_without_detail_blocks() {
    let mut rows = blank_grid(&["Player", "A", "B", "C"]);
    set(&mut rows, 1, 1, "AAA");
    set(&mut rows, 1, 3, "TBD");
    set(&mut rows, 13, 2, "garbage");

    let summary = ingest(&RawGrid::new(rows)).unwrap();
    assert_eq!(summary.len(), 3);
    assert!(summary
        .participants
        .iter()
        .all(|p| p.source == HoldingsSource::SummaryBlock));
    assert!(summary.get(&ParticipantId::from_name("C")).unwrap().holdings.is_empty());
}

#[test]
fn thirteen_rows_is_structural_error() {
    let mut rows = blank_grid(&["", "A"]);
    rows.pop();
    let err = ingest(&RawGrid::new(rows)).unwrap_err();
    assert!(matches!(err, IngestError::Structural { rows: 13, required: 14 }));
}

#[test]
fn reingesting_is_idempotent() {
    let grid = CsvFileProvider::new(fixture_path("competition.csv"))
        .fetch_grid()
        .unwrap();
    assert_eq!(ingest(&grid).unwrap(), ingest(&grid).unwrap());
}

// ─── Realistic export ────────────────────────────────────────────────

#[test]
fn fixture_ranking_and_sources() {
    let summary = load_fixture();

    let order: Vec<_> = summary
        .participants
        .iter()
        .map(|p| (p.rank, p.id.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Some(1), "alice"),
            (Some(2), "lisa"),
            (Some(3), "dana"),
            (Some(4), "bob"),
        ]
    );

    let lisa = &summary.participants[1];
    assert_eq!(lisa.source, HoldingsSource::DetailBlock { start_row: 20 });
    assert_eq!(symbols(&summary, "Lisa"), vec!["NVDA", "AMD", "TSLA"]);
    assert_eq!(lisa.portfolio_value, 10_250.5);
    assert_eq!(lisa.holdings[0].reason.as_deref(), Some("Data centers"));

    let alice = &summary.participants[0];
    assert_eq!(alice.source, HoldingsSource::DetailBlock { start_row: 14 });
    assert_eq!(alice.holdings[0].buy_price, 180.0);
    assert_eq!(alice.holdings[0].current_price, 198.0);

    // Bob's "TBD" pick is skipped, so XYZ carries the full -5%.
    assert_eq!(symbols(&summary, "Bob"), vec!["XYZ"]);
    assert_eq!(summary.participants[3].holdings[0].return_pct, -5.0);
    assert_eq!(summary.participants[3].source, HoldingsSource::SummaryBlock);
}

#[test]
fn fixture_statistics() {
    let summary = load_fixture();
    let stats = summary.statistics.as_ref().unwrap();

    assert_eq!(stats.top_performer.name, "Alice");
    assert_eq!(stats.bottom_performer.name, "Bob");
    assert_eq!(stats.day_mover.name, "Lisa");
    assert_eq!(stats.top_stock.as_ref().unwrap().symbol, "TSLA");
    let worst = stats.worst_stock.as_ref().unwrap();
    assert_eq!((worst.symbol.as_str(), worst.return_pct), ("XYZ", -5.0));

    let top: Vec<_> = stats.top10_stocks.iter().map(|h| h.symbol.as_str()).collect();
    assert_eq!(top, vec!["TSLA", "AAPL", "XYZ", "NVDA", "MSFT", "KO", "AMD"]);
    let worst10: Vec<_> = stats.worst10_stocks.iter().map(|h| h.symbol.as_str()).collect();
    assert_eq!(worst10, vec!["AMD", "KO", "MSFT", "NVDA", "XYZ", "AAPL", "TSLA"]);
    assert_eq!(stats.top10_stocks[2].return_pct, 8.0);

    assert!((stats.average_return_pct - 1.8775).abs() < 1e-9);
    assert!((stats.total_portfolio_value - 40_750.5).abs() < 1e-9);
    assert!((stats.total_pnl - 750.5).abs() < 1e-9);
    assert_eq!((stats.winners_count, stats.losers_count), (2, 2));
}

#[test]
fn fixture_search_and_chart() {
    let summary = load_fixture();
    let hits: Vec<_> = summary.search("LI").iter().map(|p| p.name.clone()).collect();
    assert_eq!(hits, vec!["Alice", "Lisa"]);
    assert_eq!(summary.search("").len(), 4);

    let chart = summary.chart_points();
    assert_eq!(chart.len(), 4);
    assert_eq!(chart[3].name, "Bob");
    assert_eq!(chart[3].pnl, -500.0);
}

#[test]
fn summary_serializes_camel_case() {
    let summary = load_fixture();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["participants"][0]["totalReturnPct"], 10.0);
    assert_eq!(json["statistics"]["top10Stocks"][0]["symbol"], "TSLA");
    assert_eq!(json["participants"][1]["source"]["kind"], "detailBlock");
}
