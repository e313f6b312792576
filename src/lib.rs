pub mod catalog;
pub mod controller;
pub mod fetch;
pub mod model;
pub mod ui;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use console::style;
use std::path::PathBuf;

use fetch::{FlaticonFetcher, PageFetcher};

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "flaticon-search",
    version,
    about = "Search Flaticon icons from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive popup TUI
    Tui {
        /// Run one catalog-backed search and exit (headless-friendly)
        #[arg(long, default_value_t = false)]
        once: bool,

        /// Skip the remote strategies; serve from the built-in catalog
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// One-shot search, printed to stdout
    Search {
        /// Free-text query
        query: String,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Skip the remote strategies; serve from the built-in catalog
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Emit records as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate man page to stdout
    Man,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { once, offline } => {
            // The TUI owns the terminal, so logs go to a file in the data dir.
            let _guard = init_logging(!once)?;
            ui::tui::run_tui(offline, once)
        }
        Commands::Search { query, page, offline, json } => {
            let _guard = init_logging(false)?;
            run_search(&query, page, offline, json)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "flis", &mut std::io::stdout());
            Ok(())
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut out = std::io::stdout();
            man.render(&mut out)?;
            Ok(())
        }
    }
}

fn run_search(query: &str, page: u32, offline: bool, json: bool) -> Result<()> {
    let fetcher = FlaticonFetcher::new(offline).context("building http client")?;
    let records = fetcher
        .fetch_page(query, page.max(1))
        .with_context(|| format!("fetching page {page} for '{query}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No icons found for \"{query}\" on page {page}.");
        println!("Try {}", ui::provider_search_url(query));
        return Ok(());
    }

    for record in &records {
        println!(
            "{:<28} {:>9}  {}",
            style(&record.title).bold(),
            style(format!("#{}", record.id)).dim(),
            record.flaticon_url
        );
    }
    println!(
        "{}",
        style(format!("{} icons (page {page})", records.len())).green()
    );
    Ok(())
}

/// Tracing setup: `RUST_LOG`-style filtering, stderr for one-shot commands,
/// a rolling file under the data dir while the TUI has the terminal.
fn init_logging(to_file: bool) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        let dir = default_data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating data dir {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(&dir, "flis.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}

pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "flaticon-search", "flaticon-search")
        .map_or_else(|| PathBuf::from(".flis"), |dirs| dirs.data_dir().to_path_buf())
}
