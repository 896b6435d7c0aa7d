//! sqlspender - personal expense tracker
//!
//! Interactive text menu for recording, editing and summarizing expenses
//! stored in a local SQLite file.

mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sqlspender_core::{Config, Database};

use crate::shell::Shell;

#[derive(Parser)]
#[command(name = "sqlspender")]
#[command(about = "Track personal expenses in a local SQLite database")]
#[command(version)]
struct Args {
    /// Database file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Configuration file to load instead of ~/.config/sqlspender/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Initialize logging (to file, stdout belongs to the menu)
    let _log_guard =
        sqlspender_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("sqlspender starting up");

    let db_path = args.db.unwrap_or_else(|| config.database_path());
    tracing::info!(path = %db_path.display(), "Opening database");

    let db = Database::open(&db_path).context("failed to open database")?;
    db.init_schema()
        .context("failed to initialize database schema")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(db, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("sqlspender shutting down");
    Ok(())
}
