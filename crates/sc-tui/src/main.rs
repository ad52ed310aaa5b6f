//! Standalone TUI binary for Series Companion.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sc_assets::{AssetResolver, ResolverConfig};
use sc_core::Catalog;
use sc_quiz::ViewerSession;
use sc_tui::app::TuiApp;
use sc_tui::tabs::TabId;

#[derive(Parser)]
#[command(
    name = "series-tui",
    about = "Browse TV series in the terminal",
    version
)]
struct Args {
    /// Catalog JSON file (defaults to the built-in shows)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory that poster and avatar paths are relative to
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Show to open first
    #[arg(long)]
    show: Option<String>,

    /// Start on a specific tab (banner, graph, episodes, quiz)
    #[arg(long, default_value = "banner")]
    tab: String,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    }
    .map_err(|e| e.to_string())?;
    let catalog = Arc::new(catalog);

    let session = match &args.show {
        Some(title) => ViewerSession::with_show(catalog, title).map_err(|e| e.to_string())?,
        None => ViewerSession::new(catalog),
    };

    let tab = TabId::from_name(&args.tab)
        .ok_or_else(|| format!("unknown tab: \"{}\"", args.tab))?;

    let resolver = AssetResolver::new(ResolverConfig::default().with_asset_root(&args.assets))
        .map_err(|e| format!("cannot set up image loading: {e}"))?;

    sc_tui::terminal::run(TuiApp::new(session, resolver, tab))
}

/// Log to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
