//! HTTP server command
//!
//! Runs the shopping list API against PostgreSQL, or against an in-memory
//! store with `--in-memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use shoplist_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use shoplist_server::http::server::{DEFAULT_INDEX_WINDOW_DAYS, MAX_INDEX_WINDOW_DAYS};
use shoplist_server::{run_server, ListStore, MemoryListStore, PgListStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "SHOPLIST_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "SHOPLIST_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Lists older than this many days are left out of GET /lists
    #[arg(long, env = "SHOPLIST_INDEX_WINDOW_DAYS", default_value_t = DEFAULT_INDEX_WINDOW_DAYS)]
    pub index_window_days: i64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Mount the unfinished item routes (echo only, nothing stored)
    #[arg(long)]
    pub item_routes: bool,

    /// Keep lists in memory instead of PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> Result<ServerConfig> {
        if self.index_window_days < 0 {
            bail!("--index-window-days must not be negative");
        }
        if self.index_window_days > MAX_INDEX_WINDOW_DAYS {
            bail!(
                "--index-window-days must be at most {}",
                MAX_INDEX_WINDOW_DAYS
            );
        }
        let index_window = chrono::TimeDelta::try_days(self.index_window_days)
            .context("--index-window-days is out of range")?;

        Ok(ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            index_window,
            item_routes: self.item_routes,
        })
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config()?;

    let store: Arc<dyn ListStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; lists will not survive a restart");
        Arc::new(MemoryListStore::new())
    } else {
        let database_url = args
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;
        Arc::new(PgListStore::new(pool))
    };

    tracing::info!("Starting shoplist server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_server_config() {
        let args = ServeArgs::parse_from(["serve", "--in-memory"]);
        let config = args.server_config().unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.index_window, chrono::Duration::days(7));
        assert!(!config.item_routes);
    }

    #[test]
    fn negative_window_is_rejected() {
        let args = ServeArgs::parse_from(["serve", "--index-window-days=-1"]);
        assert!(args.server_config().is_err());
    }

    #[test]
    fn oversized_window_is_rejected() {
        for value in [
            "--index-window-days=36501",
            "--index-window-days=1000000000",
            "--index-window-days=200000000000000",
        ] {
            let args = ServeArgs::parse_from(["serve", "--in-memory", value]);
            assert!(args.server_config().is_err(), "{value}");
        }
    }

    #[test]
    fn maximum_window_is_accepted() {
        let args = ServeArgs::parse_from(["serve", "--index-window-days=36500"]);
        let config = args.server_config().unwrap();
        assert_eq!(config.index_window, chrono::Duration::days(36_500));
    }

    #[test]
    fn item_routes_flag() {
        let args = ServeArgs::parse_from(["serve", "--item-routes", "--bind", "0.0.0.0:9000"]);
        let config = args.server_config().unwrap();
        assert!(config.item_routes);
        assert_eq!(config.bind_addr.port(), 9000);
    }
}
