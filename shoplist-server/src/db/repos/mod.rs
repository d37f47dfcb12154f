//! Repository implementations for database access
//!
//! - One parameterized statement per operation
//! - Writes use RETURNING instead of a follow-up SELECT

pub mod lists;

pub use lists::PgListStore;
