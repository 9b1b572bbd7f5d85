use anyhow::{Context, Result};
use clap::Parser;
use slip_core::ReceiptSession;
use slip_core::db::{StoreConfig, StoreRegistry};
use slip_db_sqlite::SqliteStoreFactory;

use slip_cli::{logging, repl};

/// Interactive receipt-slip calculator.
///
/// Enter rows (grade or piece count, weight, rate), watch the totals and
/// profit/loss update, and save the slip to the database.
#[derive(Parser, Debug)]
#[command(name = "slip")]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database URL (e.g. sqlite:slip.db?mode=rwc to create if missing)
    #[arg(short, long, default_value = "sqlite:slip.db?mode=rwc")]
    database: String,

    /// Storage backend to use
    #[arg(short, long, default_value = "sqlite")]
    backend: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let mut registry = StoreRegistry::new();
    registry.register(Box::new(SqliteStoreFactory));

    let config = StoreConfig {
        backend: args.backend,
        connection_string: args.database,
    };
    let store = registry
        .create(&config)
        .await
        .with_context(|| format!("Failed to open store '{}'", config.connection_string))?;

    let stdin = std::io::stdin();
    repl::run(
        ReceiptSession::new(),
        store.as_ref(),
        stdin.lock(),
        std::io::stdout(),
    )
    .await
}
