//! Storage layer for the SEO Autopilot client
//!
//! Rows live in the managed database service; this module holds:
//! - `models`: row structures for each collection
//! - `store`: the `Store` write boundary and the dashboard read queries
//! - `memory`: a recording `Store` used for dry runs

pub mod memory;
pub mod models;
pub mod store;


// Re-export the main types for easy access
pub use models::*;
pub use memory::{MemoryStore, Write};
pub use store::{Store, Table};
