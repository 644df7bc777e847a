//! Integration tests for CSV file acquisition and the refresh board.
//!
//! Writes sheet exports into a temp directory, rewrites them between
//! refreshes, and checks that the board only ever exposes complete snapshots.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use standings_core::{
    Board, CsvFileProvider, GridLayout, IngestError, Ingestor, RefreshOutcome, StandingsConfig,
};

fn sheet_csv(alice_total: &str, bob_total: &str) -> String {
    let mut lines = vec!["Player,Alice,Bob".to_string()];
    lines.push("Stock 1,AAA,BBB".into());
    for i in 2..=10 {
        lines.push(format!("Stock {i},,"));
    }
    lines.push("Value,\"$10,500\",\"$9,900\"".into());
    lines.push("Day,0.5%,-0.1%".into());
    lines.push(format!("Total,{alice_total},{bob_total}"));
    lines.join("\n") + "\n"
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn board_tracks_file_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    write(&path, &sheet_csv("5%", "-1%"));

    let provider = CsvFileProvider::new(&path);
    let mut board = Board::default();

    assert_eq!(board.refresh(&provider).unwrap(), RefreshOutcome::Initial);
    let first_leader = board.latest().unwrap().summary.participants[0].name.clone();
    assert_eq!(first_leader, "Alice");

    assert_eq!(board.refresh(&provider).unwrap(), RefreshOutcome::Unchanged);

    write(&path, &sheet_csv("1%", "3%"));
    assert_eq!(board.refresh(&provider).unwrap(), RefreshOutcome::Changed);
    let snap = board.latest().unwrap();
    assert_eq!(snap.summary.participants[0].name, "Bob");
    assert_eq!(snap.summary.participants[0].rank, Some(1));
}

#[test]
fn truncated_export_keeps_last_good_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    write(&path, &sheet_csv("5%", "-1%"));

    let provider = CsvFileProvider::new(&path);
    let mut board = Board::default();
    board.refresh(&provider).unwrap();
    let good = board.latest().unwrap().clone();

    write(&path, "Player,Alice,Bob\nStock 1,AAA,BBB\n");
    let err = board.refresh(&provider).unwrap_err();
    assert!(matches!(err, IngestError::Structural { rows: 2, required: 14 }));
    assert_eq!(board.latest(), Some(&good));

    fs::remove_file(&path).unwrap();
    let err = board.refresh(&provider).unwrap_err();
    assert!(matches!(err, IngestError::Acquisition(_)));
    assert_eq!(board.latest(), Some(&good));
}

#[test]
fn config_file_drives_layout() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("standings.toml");
    write(
        &config_path,
        r#"
[layout]
max_participants = 1
"#,
    );
    let config = StandingsConfig::from_file(&config_path).unwrap();
    assert_eq!(config.layout.max_participants, 1);
    assert_ne!(config.layout, GridLayout::default());

    let sheet_path = dir.path().join("sheet.csv");
    write(&sheet_path, &sheet_csv("5%", "-1%"));

    let mut board = Board::new(Ingestor::new(config.layout));
    board.refresh(&CsvFileProvider::new(&sheet_path)).unwrap();
    let summary = &board.latest().unwrap().summary;
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.participants[0].name, "Alice");
}
