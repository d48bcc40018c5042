//! Request execution
//!
//! This module runs a validated request against the mapping store and
//! tracks the verbosity used for diagnostics.

pub mod context;
pub mod operation;

// Re-export main types
pub use context::*;
pub use operation::*;
