use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use inventory_board::export::{export_csv, export_json};
use inventory_board::loader::{load_document, spawn_loader, DataSource, DEFAULT_SOURCE};
use inventory_board::ui::App;
use inventory_board::view::InventoryView;

#[derive(Parser, Debug)]
#[command(name = "inventory-board")]
#[command(about = "Inventory Board - browse a building's sale units floor by floor")]
#[command(version)]
struct Args {
    /// Inventory JSON: a file path or an http(s) URL
    #[arg(env = "INVENTORY_SOURCE", default_value = DEFAULT_SOURCE)]
    source: String,

    /// Export the floor grid to CSV and exit
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export counters and floor grid to JSON and exit
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Log file (the terminal is owned by the dashboard)
    #[arg(long, value_name = "FILE", env = "INVENTORY_LOG")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("inventory-board.log"));
    init_tracing(&log_path);

    let source = DataSource::parse(&args.source);

    if args.csv.is_some() || args.json.is_some() {
        let view = InventoryView::derive(&load_document(&source)?);

        if let Some(csv_path) = &args.csv {
            export_csv(&view, csv_path)?;
            println!("Exported to CSV: {}", csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(&view, json_path)?;
            println!("Exported to JSON: {}", json_path.display());
        }

        return Ok(());
    }

    let app = App::new(source.to_string()).with_loader(spawn_loader(source));

    let terminal = ratatui::init();
    let result = with_mouse_capture(
        || execute!(stdout(), EnableMouseCapture),
        || app.run(terminal),
        || execute!(stdout(), DisableMouseCapture),
    );
    ratatui::restore();
    result
}

/// Runs the dashboard between enabling and disabling mouse capture. The
/// terminal must be restored whatever happens here, so a failure to disable
/// capture is only logged and never replaces the run's own result.
fn with_mouse_capture(
    enable: impl FnOnce() -> io::Result<()>,
    run: impl FnOnce() -> Result<()>,
    disable: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let result = enable().map_err(color_eyre::eyre::Report::from).and_then(|()| run());
    if let Err(error) = disable() {
        tracing::warn!(%error, "failed to disable mouse capture");
    }
    result
}

/// Sends tracing output to `path`. Logging is skipped when the file cannot
/// be opened; the dashboard still runs.
fn init_tracing(path: &Path) {
    let Ok(file) = File::create(path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}
