//! addrbook binary
//!
//! Loads the config and contacts, runs the interactive menu, and saves the
//! book on exit.

use std::io;
use std::path::PathBuf;

use addrbook::cli::Session;
use addrbook::{Config, CsvStorage};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Command-line address book
#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(about = "Manage contacts stored in a CSV file")]
#[command(version)]
struct Args {
    /// Config file (created with defaults if missing)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Override the CSV path from the config file
    #[arg(long)]
    csv_path: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr so they don't interleave with the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,addrbook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(path) = args.csv_path {
        config.csv_path = path;
    }
    if let Err(e) = config.validate() {
        tracing::error!("Invalid config: {}", e);
        std::process::exit(1);
    }

    tracing::info!("addrbook v{}", addrbook::VERSION);
    tracing::info!("Contact file: {}", config.csv_path.display());

    let storage = CsvStorage::from_config(&config);
    let book = match storage.load() {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Error loading address book: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut session = Session::new(book.clone(), stdin.lock(), io::stdout());
    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
    }

    if let Err(e) = storage.save(&book) {
        tracing::error!("Error saving address book: {}", e);
        std::process::exit(1);
    }

    println!("Goodbye!");
}
