//! Transfer types exchanged over HTTP
//!
//! Storage records live in `store`; these are the JSON shapes clients see.

pub mod list;
pub mod validation;
pub mod wire;

pub use list::{List, ListBody, ListItem, CREATED_ON_FORMAT};
pub use validation::ValidationError;
