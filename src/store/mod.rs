//! SQLite-backed mapping store
//!
//! A [`Store`] wraps one connection to an existing mapping database. All work
//! happens inside a single [`Session`] transaction: it is committed once at
//! the end, and rolled back when dropped uncommitted.

use crate::config::{Credential, Settings};
use crate::error::{StoreError, StoreResult};
use crate::mapping::{ExportScope, Mapping};
use rusqlite::{params, Connection, ErrorCode, OpenFlags, Transaction};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a statement waits on a locked database before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the mapping database
pub struct Store {
    conn: Connection,
    table: String,
    path: PathBuf,
}

impl Store {
    /// Open the database named in the settings
    ///
    /// The file must already exist; the schema is never created here. The
    /// path is a plain file name, never a `file:` URI. The
    /// credential is applied with `PRAGMA key`, which encrypted builds use
    /// to unlock the file and plain SQLite ignores.
    pub fn connect(settings: &Settings, credential: &Credential) -> StoreResult<Self> {
        let path = settings.database.clone();
        if !path.is_file() {
            return Err(StoreError::Missing(path));
        }

        let open_error = |source| StoreError::Open {
            path: path.clone(),
            source,
        };

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(open_error)?;

        conn.pragma_update(None, "key", credential.expose())
            .map_err(open_error)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(open_error)?;

        Ok(Store {
            conn,
            table: settings.table.clone(),
            path,
        })
    }

    /// Path of the open database
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start the transaction every statement of this invocation runs in
    pub fn begin(&mut self) -> StoreResult<Session<'_>> {
        let tx = self.conn.transaction()?;
        Ok(Session {
            tx,
            table: &self.table,
        })
    }

    /// Close the connection, reporting any error instead of dropping it
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}

/// An open transaction on the mapping table
pub struct Session<'a> {
    tx: Transaction<'a>,
    table: &'a str,
}

impl Session<'_> {
    /// Insert a new mapping
    ///
    /// A distinguished name that is already mapped violates the table's
    /// uniqueness constraint and is reported as [`StoreError::Conflict`].
    pub fn insert(&self, mapping: &Mapping) -> StoreResult<()> {
        let sql = format!("INSERT INTO {} (dn, user) VALUES (?1, ?2)", self.table);
        match self.tx.execute(&sql, params![mapping.dn, mapping.user]) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::Conflict {
                    dn: mapping.dn.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether exactly this (dn, user) pair is present
    pub fn contains(&self, mapping: &Mapping) -> StoreResult<bool> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE dn = ?1 AND user = ?2",
            self.table
        );
        let count: i64 = self
            .tx
            .query_row(&sql, params![mapping.dn, mapping.user], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Delete the (dn, user) pair, returning the number of rows removed
    ///
    /// Deleting a pair that is not present is not an error.
    pub fn delete(&self, mapping: &Mapping) -> StoreResult<usize> {
        let sql = format!("DELETE FROM {} WHERE dn = ?1 AND user = ?2", self.table);
        Ok(self.tx.execute(&sql, params![mapping.dn, mapping.user])?)
    }

    /// List mappings ordered by user, then dn
    pub fn list(&self, scope: &ExportScope) -> StoreResult<Vec<Mapping>> {
        let to_mapping = |row: &rusqlite::Row<'_>| -> rusqlite::Result<Mapping> {
            Ok(Mapping {
                dn: row.get(0)?,
                user: row.get(1)?,
            })
        };

        let mappings = match scope {
            ExportScope::All => {
                let sql = format!("SELECT dn, user FROM {} ORDER BY user, dn", self.table);
                let mut stmt = self.tx.prepare(&sql)?;
                let rows = stmt.query_map([], to_mapping)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            ExportScope::User(user) => {
                let sql = format!(
                    "SELECT dn, user FROM {} WHERE user = ?1 ORDER BY user, dn",
                    self.table
                );
                let mut stmt = self.tx.prepare(&sql)?;
                let rows = stmt.query_map(params![user], to_mapping)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(mappings)
    }

    /// Commit everything done in this session
    pub fn commit(self) -> StoreResult<()> {
        self.tx.commit()?;
        Ok(())
    }
}
