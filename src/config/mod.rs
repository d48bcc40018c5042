//! Settings and credential loading
//!
//! This module handles discovery and parsing of the mapdn.yml settings file,
//! validation of its values, and reading the database password.

pub mod credential;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use credential::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
