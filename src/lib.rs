//! mapdn - distinguished name mapping administration
//!
//! mapdn maintains the table mapping distinguished names to local accounts:
//! it adds and deletes mappings and exports them in grid-mapfile format.
//! Authentication of the caller is left to whatever front-end invokes it.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod mapping;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use error::{MapdnError, Result};

/// Current version of mapdn
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
