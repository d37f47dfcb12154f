//! Command implementations for shoplist CLI

pub mod check;
pub mod serve;

pub use check::run_check;
pub use serve::run_serve;
