//! Mapping model and request validation
//!
//! A mapping associates a distinguished name with a local account. This
//! module validates command-line requests and formats grid-mapfile output.

pub mod dn;
pub mod gridmap;
pub mod request;

// Re-export main types
pub use dn::*;
pub use gridmap::*;
pub use request::*;

/// A distinguished name mapped to a local account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Distinguished name
    pub dn: String,

    /// Local account name
    pub user: String,
}

impl Mapping {
    /// Create a new mapping
    pub fn new(dn: impl Into<String>, user: impl Into<String>) -> Self {
        Mapping {
            dn: dn.into(),
            user: user.into(),
        }
    }
}
