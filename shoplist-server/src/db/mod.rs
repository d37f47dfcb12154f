//! PostgreSQL backend - connection pool and repositories
//!
//! The `shopping_lists` table is expected to exist already:
//!
//! ```sql
//! CREATE TABLE shopping_lists (
//!     id          BIGSERIAL PRIMARY KEY,
//!     description TEXT NOT NULL,
//!     created_on  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     deleted     BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::PgListStore;
