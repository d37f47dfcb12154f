//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use shoplist_server::db::create_pool;
use shoplist_server::{ListStore, PgListStore};

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Connect and ping the database
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to connect to database")?;

    let store = PgListStore::new(pool);
    store.ping().await.context("Database ping failed")?;

    tracing::info!("Database reachable");
    println!("ok");
    Ok(())
}
