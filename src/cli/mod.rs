//! CLI interface and argument parsing
//!
//! This module handles command-line parsing and error reporting.

pub mod app;

// Re-export main types
pub use app::*;
