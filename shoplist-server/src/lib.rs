//! shoplist-server: HTTP service for shopping lists
//!
//! CRUD over a `shopping_lists` table with soft delete and a rolling
//! index window. Storage sits behind the `ListStore` trait so the router
//! runs against PostgreSQL in production and an in-memory store in tests.

pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod store;

pub use db::PgListStore;
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
pub use store::{ListRecord, ListStore, MemoryListStore, StoreError};
