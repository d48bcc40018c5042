//! Running a request against the store
//!
//! Connect, apply the mutation, export, commit, close. Every statement runs
//! in one transaction; any error drops the session (rolling it back) and the
//! store (closing the connection) on the way out.

use crate::config::{Credential, Settings};
use crate::error::Result;
use crate::mapping::{write_gridmap, Mutation, Request};
use crate::runner::Context;
use crate::store::Store;
use std::io::Write;

/// What an invocation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether a row was added or removed
    pub changed: bool,

    /// Number of exported lines, if an export ran
    pub exported: Option<usize>,
}

/// Connect to the store and run the request
pub fn run_request<W: Write + ?Sized>(
    settings: &Settings,
    credential: &Credential,
    request: &Request,
    out: &mut W,
    ctx: &Context,
) -> Result<Outcome> {
    let mut store = Store::connect(settings, credential)?;
    ctx.print_debug(&format!("Connected to {}", store.path().display()));

    let outcome = execute(request, &mut store, out, ctx)?;
    store.close()?;

    if outcome.changed {
        ctx.print_debug("Mapping database modified");
    }

    Ok(outcome)
}

/// Run the request on an open store and commit
pub fn execute<W: Write + ?Sized>(
    request: &Request,
    store: &mut Store,
    out: &mut W,
    ctx: &Context,
) -> Result<Outcome> {
    let session = store.begin()?;

    let changed = match &request.mutation {
        Some(Mutation::Add(mapping)) => {
            session.insert(mapping)?;
            ctx.print_debug(&format!("Added \"{}\" -> {}", mapping.dn, mapping.user));
            true
        }
        Some(Mutation::Delete(mapping)) => {
            let existed = session.contains(mapping)?;
            session.delete(mapping)?;
            if existed {
                ctx.print_debug(&format!("Deleted \"{}\" -> {}", mapping.dn, mapping.user));
            } else {
                ctx.print_debug(&format!(
                    "No mapping \"{}\" -> {}, nothing deleted",
                    mapping.dn, mapping.user
                ));
            }
            existed
        }
        None => false,
    };

    let exported = match &request.export {
        Some(scope) => {
            let mappings = session.list(scope)?;
            Some(write_gridmap(out, &mappings)?)
        }
        None => None,
    };

    session.commit()?;
    Ok(Outcome { changed, exported })
}
