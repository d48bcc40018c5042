//! Command-line request validation
//!
//! Turns the raw flag values into a [`Request`], checking them in a fixed
//! order and stopping at the first violation.

use crate::error::{RequestError, RequestResult};
use crate::mapping::{DnRules, Mapping};

/// Raw operation flags and operands as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestArgs {
    pub add: bool,
    pub delete: bool,
    pub export: bool,
    pub dn: Option<String>,
    pub user: Option<String>,
}

/// A store mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Insert a new mapping
    Add(Mapping),

    /// Remove a mapping matching both dn and user
    Delete(Mapping),
}

/// Which rows an export lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    /// Every mapping in the table
    All,

    /// Mappings for one local account
    User(String),
}

/// A validated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// At most one mutation
    pub mutation: Option<Mutation>,

    /// Export to run after the mutation, if any
    pub export: Option<ExportScope>,
}

impl RequestArgs {
    /// Check the flag combination alone
    ///
    /// These checks need no settings, so they run before anything is loaded.
    pub fn check_flags(&self) -> RequestResult<()> {
        if self.add && self.delete {
            return Err(RequestError::ConflictingOperations);
        }

        if (self.add || self.delete) && (self.dn.is_none() || self.user.is_none()) {
            return Err(RequestError::MissingOperands);
        }

        if !self.add && !self.delete && !self.export {
            return Err(RequestError::NoOperation);
        }

        Ok(())
    }

    /// Validate the flags and build a request
    ///
    /// The distinguished name is only checked when a mutation was asked for,
    /// which is exactly when the no-operation check cannot fire.
    pub fn validate(self, rules: &DnRules) -> RequestResult<Request> {
        self.check_flags()?;

        let mutation = match (self.add, self.delete, &self.dn, &self.user) {
            (true, _, Some(dn), Some(user)) | (_, true, Some(dn), Some(user)) => {
                rules.validate(dn)?;

                let mapping = Mapping::new(dn.clone(), user.clone());
                Some(if self.add {
                    Mutation::Add(mapping)
                } else {
                    Mutation::Delete(mapping)
                })
            }
            _ => None,
        };

        let export = self.export.then(|| match self.user {
            Some(user) => ExportScope::User(user),
            None => ExportScope::All,
        });

        Ok(Request { mutation, export })
    }
}
