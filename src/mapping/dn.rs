//! Distinguished name validation

use crate::error::{RequestError, RequestResult};
use regex::Regex;

/// Longest distinguished name accepted by default
pub const DEFAULT_MAX_DN_LENGTH: usize = 255;

/// Characters a distinguished name may contain by default
pub const DEFAULT_DN_PATTERN: &str = r"^[A-Za-z0-9:/,.@()\-+='_ ]+$";

/// Compiled distinguished name rules
#[derive(Debug, Clone)]
pub struct DnRules {
    /// Maximum length in characters
    pub max_length: usize,

    /// Pattern the whole name must match
    pub pattern: Regex,
}

impl DnRules {
    /// Build rules from a length limit and a pattern
    ///
    /// The pattern is anchored at both ends whether or not it already is.
    pub fn new(max_length: usize, pattern: &str) -> Result<Self, regex::Error> {
        Ok(DnRules {
            max_length,
            pattern: Regex::new(&format!("^(?:{})$", pattern))?,
        })
    }

    /// Check a distinguished name against the rules
    ///
    /// The length check runs first, so an over-long name is reported as
    /// such even when it also contains invalid characters.
    pub fn validate(&self, dn: &str) -> RequestResult<()> {
        let length = dn.chars().count();
        if length > self.max_length {
            return Err(RequestError::DnTooLong {
                length,
                max: self.max_length,
            });
        }

        if !self.pattern.is_match(dn) {
            return Err(RequestError::InvalidDnCharacter);
        }

        Ok(())
    }
}
