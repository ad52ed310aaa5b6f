//! CLI frontend for Series Companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sc_assets::DEFAULT_PROBE_TIMEOUT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "series",
    about = "Series Companion: posters, character graphs, episode recaps and trivia",
    version,
    propagate_version = true
)]
struct Cli {
    /// Catalog JSON file (default: the built-in dataset)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory containing posters/ and avatars/
    #[arg(long, global = true, default_value = ".")]
    assets: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all shows in the catalog
    List,

    /// Show everything about a show
    Show {
        /// Show title (case-insensitive)
        title: String,

        /// Only print one section: banner, graph, episodes, quiz
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Display the character relationship graph
    Graph {
        /// Show title (case-insensitive)
        title: String,

        /// Focus on a specific character
        #[arg(short, long)]
        focus: Option<String>,
    },

    /// Print the episode recap
    Episodes {
        /// Show title (case-insensitive)
        title: String,

        /// Only this season (label or number)
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Play the trivia quiz interactively
    Quiz {
        /// Show title (case-insensitive)
        title: String,
    },

    /// Export a show page to a different format
    Export {
        /// Show title (case-insensitive)
        title: String,

        /// Output format: html, markdown, json
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check whether remote poster URLs are reachable
    Probe {
        /// URLs to probe (default: a built-in list)
        urls: Vec<String>,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
        timeout: u64,
    },

    /// Report data issues in the catalog
    Check,

    /// Launch the interactive terminal UI
    Tui {
        /// Show to open first
        #[arg(short, long)]
        show: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let catalog = cli.catalog.as_deref();
    let assets = cli.assets.as_path();

    let result = match cli.command {
        Commands::List => commands::list::run(catalog),
        Commands::Show { title, section } => {
            commands::show::run(catalog, &title, section.as_deref())
        }
        Commands::Graph { title, focus } => {
            commands::graph::run(catalog, &title, focus.as_deref())
        }
        Commands::Episodes { title, season } => {
            commands::episodes::run(catalog, &title, season.as_deref())
        }
        Commands::Quiz { title } => commands::quiz::run(catalog, &title),
        Commands::Export {
            title,
            format,
            output,
        } => commands::export::run(catalog, assets, &title, &format, output.as_deref()),
        Commands::Probe { urls, timeout } => commands::probe::run(&urls, timeout),
        Commands::Check => commands::check::run(catalog),
        Commands::Tui { show } => commands::tui::run(catalog, assets, show.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
