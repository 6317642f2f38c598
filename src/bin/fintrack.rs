//! fintrack - terminal client for currency rates and financial news.
//!
//! Usage:
//!   fintrack                          # built-in rates, mock news
//!   fintrack --rates rates.json      # rates from a JSON file
//!   fintrack --news-url https://...  # news from a JSON endpoint

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use fintrack::feed::{HttpNewsSource, MockNewsSource, NewsSource};
use fintrack::rates::{builtin_rows, load_rates};
use fintrack::tui::{App, AppState};

/// Redraw interval for the UI loop.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Currency and news terminal client.
#[derive(Parser)]
#[command(name = "fintrack", about = "Currency and news terminal client", version)]
struct Args {
    /// Path to a JSON rates file: an array of {"code", "rate"} objects.
    /// Built-in static rates are used when omitted.
    #[arg(short, long, value_name = "PATH")]
    rates: Option<PathBuf>,

    /// News endpoint returning {"articles": [...], "hasMore": bool}.
    /// A deterministic mock generator is used when omitted.
    #[arg(long, value_name = "URL")]
    news_url: Option<String>,

    /// Write logs to this file. Stderr belongs to the TUI, so logging is
    /// disabled unless a file is given.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::INFO,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            }
        }
    }
}

fn init_logging(path: &PathBuf, level: Level) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(path, args.log_level()) {
            eprintln!("Error opening log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    // Load the currency rows (rates file or built-in defaults)
    let rows = match args.rates {
        Some(ref path) => match load_rates(path) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("Error loading rates from '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => builtin_rows(),
    };
    if rows.is_empty() {
        eprintln!("Error: rates list is empty");
        std::process::exit(1);
    }

    // Create the news source based on configuration
    let source: Box<dyn NewsSource> = match args.news_url {
        Some(ref url) => match HttpNewsSource::new(url.clone()) {
            Ok(source) => Box::new(source),
            Err(e) => {
                eprintln!("Error creating news client: {}", e);
                std::process::exit(1);
            }
        },
        None => Box::new(MockNewsSource::new()),
    };

    let app = App::new(AppState::new(rows), source);
    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
