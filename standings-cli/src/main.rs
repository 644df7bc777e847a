//! Standings CLI — ingest a competition sheet and report the leaderboard.
//!
//! Commands:
//! - `show` — ranked leaderboard with headline statistics
//! - `stocks` — best and worst distinct picks across all portfolios
//! - `export` — write JSON / CSV renderings of the current standings
//! - `watch` — poll the source and reprint whenever the sheet changes

mod display;
mod export;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use standings_core::{
    Board, CsvFileProvider, GridProvider, Ingestor, LeaderboardSummary, RefreshOutcome,
    SheetProvider, Snapshot, StandingsConfig,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "standings",
    about = "Stock competition standings from a published spreadsheet"
)]
struct Cli {
    /// TOML config with source URL and sheet layout overrides.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the sheet comes from. Falls back to `source.url` in the config.
#[derive(Args)]
struct SourceArgs {
    /// Published CSV export URL.
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Local CSV file.
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked leaderboard and headline statistics.
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Only list participants whose name contains this text.
        #[arg(long)]
        filter: Option<String>,

        /// List each participant's holdings under their row.
        #[arg(long, default_value_t = false)]
        holdings: bool,
    },
    /// Print the top and worst distinct stocks.
    Stocks {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Export the current standings.
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file (or directory for `bundle`). Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Re-fetch on an interval and reprint when the sheet changes.
    Watch {
        #[command(flatten)]
        source: SourceArgs,

        /// Seconds between refreshes.
        #[arg(long, default_value_t = 60)]
        interval: u64,

        /// Stop after this many refreshes. Runs until interrupted by default.
        #[arg(long)]
        count: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Snapshot JSON.
    Json,
    /// One row per participant.
    Csv,
    /// One row per holding.
    Holdings,
    /// All three into a timestamped directory.
    Bundle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Show {
            source,
            filter,
            holdings,
        } => run_show(&config, &source, filter.as_deref(), holdings),
        Commands::Stocks { source } => run_stocks(&config, &source),
        Commands::Export {
            source,
            format,
            output,
        } => run_export(&config, &source, format, output.as_deref()),
        Commands::Watch {
            source,
            interval,
            count,
        } => run_watch(&config, &source, Duration::from_secs(interval), count),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit `--config` must exist; otherwise `standings.toml` is used if present.
fn load_config(path: Option<&Path>) -> Result<StandingsConfig> {
    if let Some(path) = path {
        return StandingsConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let default_path = Path::new("standings.toml");
    if default_path.exists() {
        info!(path = %default_path.display(), "using default config");
        return Ok(StandingsConfig::from_file(default_path)?);
    }
    Ok(StandingsConfig::default())
}

fn build_provider(config: &StandingsConfig, source: &SourceArgs) -> Result<Box<dyn GridProvider>> {
    if let Some(path) = &source.file {
        return Ok(Box::new(CsvFileProvider::new(path)));
    }
    let url = match (&source.url, &config.source.url) {
        (Some(url), _) | (None, Some(url)) => url.clone(),
        (None, None) => bail!("no sheet source: pass --url or --file, or set source.url in the config"),
    };
    Ok(Box::new(SheetProvider::new(url, config.source.timeout())?))
}

/// One refresh through a fresh board; the board keeps hash and timestamp.
fn fetch_snapshot(config: &StandingsConfig, source: &SourceArgs) -> Result<Snapshot> {
    let provider = build_provider(config, source)?;
    let mut board = Board::new(Ingestor::new(config.layout.clone()));
    board
        .refresh(provider.as_ref())
        .with_context(|| format!("failed to load standings from {}", provider.name()))?;
    match board.latest() {
        Some(snapshot) => Ok(snapshot.clone()),
        None => bail!("refresh succeeded but produced no snapshot"),
    }
}

fn run_show(
    config: &StandingsConfig,
    source: &SourceArgs,
    filter: Option<&str>,
    holdings: bool,
) -> Result<()> {
    let snapshot = fetch_snapshot(config, source)?;
    print_board(&snapshot.summary, filter, holdings);
    Ok(())
}

fn print_board(summary: &LeaderboardSummary, filter: Option<&str>, holdings: bool) {
    if summary.is_empty() {
        println!("No participants found.");
        return;
    }

    let rows = match filter {
        Some(query) => summary.search(query),
        None => summary.participants.iter().collect(),
    };
    if rows.is_empty() {
        println!("No participants match the filter.");
    } else {
        print!("{}", display::render_leaderboard(&rows, holdings));
    }

    if let Some(stats) = &summary.statistics {
        println!();
        print!("{}", display::render_statistics(stats));
    }
}

fn run_stocks(config: &StandingsConfig, source: &SourceArgs) -> Result<()> {
    let snapshot = fetch_snapshot(config, source)?;
    match &snapshot.summary.statistics {
        Some(stats) => print!("{}", display::render_stock_lists(stats)),
        None => println!("No participants found."),
    }
    Ok(())
}

fn run_export(
    config: &StandingsConfig,
    source: &SourceArgs,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let snapshot = fetch_snapshot(config, source)?;

    let content = match format {
        ExportFormat::Json => export::export_json(&snapshot)?,
        ExportFormat::Csv => export::export_standings_csv(&snapshot.summary)?,
        ExportFormat::Holdings => export::export_holdings_csv(&snapshot.summary)?,
        ExportFormat::Bundle => {
            let dir = output.unwrap_or_else(|| Path::new("exports"));
            let run_dir = export::save_exports(&snapshot, dir)?;
            println!("Exports saved to: {}", run_dir.display());
            return Ok(());
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn run_watch(
    config: &StandingsConfig,
    source: &SourceArgs,
    interval: Duration,
    count: Option<u64>,
) -> Result<()> {
    let provider = build_provider(config, source)?;
    let mut board = Board::new(Ingestor::new(config.layout.clone()));
    let mut iteration = 0u64;

    loop {
        iteration += 1;
        match board.refresh(provider.as_ref()) {
            Ok(RefreshOutcome::Initial) | Ok(RefreshOutcome::Changed) => {
                if let Some(snapshot) = board.latest() {
                    println!(
                        "── {} ──",
                        snapshot.refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                    print_board(&snapshot.summary, None, false);
                    println!();
                }
            }
            Ok(RefreshOutcome::Unchanged) => info!(iteration, "sheet unchanged"),
            Err(err) => match board.latest() {
                Some(snapshot) => warn!(
                    error = %err,
                    showing = %snapshot.refreshed_at,
                    "refresh failed; keeping previous standings"
                ),
                None => eprintln!("Refresh failed: {err}"),
            },
        }

        if count.is_some_and(|n| iteration >= n) {
            break;
        }
        std::thread::sleep(interval);
    }

    Ok(())
}
