//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch installation: database with schema, password file, settings file
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub database: PathBuf,
    pub password_file: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnv {
    /// Create a scratch installation with an empty mapping table
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let database = temp_dir.path().join("mapdn.db");
        let password_file = temp_dir.path().join("admindn");
        let config_path = temp_dir.path().join("mapdn.yml");

        Connection::open(&database)
            .unwrap()
            .execute_batch(
                "CREATE TABLE dnusermap (dn VARCHAR(255) NOT NULL PRIMARY KEY, user VARCHAR(64) NOT NULL);",
            )
            .unwrap();
        fs::write(&password_file, "s3cret\n").unwrap();
        write_settings(&config_path, &database, &password_file);

        TestEnv {
            temp_dir,
            database,
            password_file,
            config_path,
        }
    }

    /// The mapdn binary, pointed at this installation through MAPDN_CONFIG
    pub fn mapdn(&self) -> Command {
        let mut cmd = Command::cargo_bin("mapdn").unwrap();
        cmd.current_dir(self.temp_dir.path())
            .env("MAPDN_CONFIG", &self.config_path)
            .env_remove("CLICOLOR_FORCE");
        cmd
    }

    /// Insert a row directly, bypassing the CLI
    pub fn insert(&self, dn: &str, user: &str) {
        Connection::open(&self.database)
            .unwrap()
            .execute(
                "INSERT INTO dnusermap (dn, user) VALUES (?1, ?2)",
                [dn, user],
            )
            .unwrap();
    }

    /// All rows ordered by dn
    pub fn rows(&self) -> Vec<(String, String)> {
        let conn = Connection::open(&self.database).unwrap();
        let mut stmt = conn
            .prepare("SELECT dn, user FROM dnusermap ORDER BY dn")
            .unwrap();
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        rows.collect::<Result<Vec<_>, _>>().unwrap()
    }
}

/// Write a settings file naming the database and password file
pub fn write_settings(config_path: &Path, database: &Path, password_file: &Path) {
    fs::write(
        config_path,
        format!(
            "database: {}\npassword_file: {}\n",
            database.display(),
            password_file.display()
        ),
    )
    .unwrap();
}
