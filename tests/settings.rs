//! Integration tests for settings loading

mod common;

use common::{write_settings, TestEnv};
use mapdn::config::{load_settings, parse_config, validate_settings};
use predicates::prelude::*;
use rusqlite::Connection;
use std::fs;

#[test]
fn test_load_explicit_settings() {
    let env = TestEnv::new();

    let (settings, path) = load_settings(Some(env.config_path.as_path())).unwrap();
    assert_eq!(path, Some(env.config_path.clone()));
    assert_eq!(settings.database, env.database);
    assert_eq!(settings.password_file, env.password_file);
    assert_eq!(settings.table, "dnusermap");

    let rules = validate_settings(&settings).unwrap();
    assert_eq!(rules.max_length, 255);
}

#[test]
fn test_config_flag_overrides_env() {
    let env = TestEnv::new();
    let other = TestEnv::new();
    other.insert("cn=other", "other");

    env.mapdn()
        .args(["-c"])
        .arg(&other.config_path)
        .arg("-e")
        .assert()
        .success()
        .stdout("\"cn=other\" other\n");
}

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();

    env.mapdn()
        .args(["--config", "does-not-exist.yml", "-e"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Settings file not found"));
}

#[test]
fn test_custom_table_and_limits() {
    let env = TestEnv::new();
    Connection::open(&env.database)
        .unwrap()
        .execute_batch("CREATE TABLE gridmap (dn TEXT NOT NULL UNIQUE, user TEXT NOT NULL);")
        .unwrap();

    let config_path = env.temp_dir.path().join("gridmap.yml");
    fs::write(
        &config_path,
        format!(
            "database: {}\npassword_file: {}\ntable: gridmap\nmax_dn_length: 8\n",
            env.database.display(),
            env.password_file.display()
        ),
    )
    .unwrap();

    env.mapdn()
        .arg("--config")
        .arg(&config_path)
        .args(["-a", "-e", "--dn", "cn=carol", "--user", "carol"])
        .assert()
        .success()
        .stdout("\"cn=carol\" carol\n");

    env.mapdn()
        .arg("--config")
        .arg(&config_path)
        .args(["-a", "--dn", "cn=carolyn", "--user", "carol"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("maximum length 8"));

    assert!(env.rows().is_empty());
}

#[test]
fn test_invalid_settings_rejected() {
    let env = TestEnv::new();
    fs::write(&env.config_path, "table: \"maps; DROP TABLE dnusermap\"\n").unwrap();

    env.mapdn()
        .arg("-e")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid table name"));
}

#[test]
fn test_unknown_setting_rejected() {
    let env = TestEnv::new();
    fs::write(&env.config_path, "host: db.example.org\n").unwrap();

    env.mapdn()
        .arg("-e")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn test_settings_moved_database() {
    let env = TestEnv::new();
    let moved = env.temp_dir.path().join("moved.db");
    fs::rename(&env.database, &moved).unwrap();
    write_settings(&env.config_path, &moved, &env.password_file);

    env.mapdn().arg("-e").assert().success().stdout("");
}

#[test]
fn test_parse_config_defaults() {
    let settings = parse_config("max_dn_length: 64\n").unwrap();
    assert_eq!(settings.max_dn_length, 64);
    assert_eq!(settings.table, "dnusermap");
}

#[test]
fn test_other_users_home_rejected() {
    let env = TestEnv::new();
    fs::write(
        &env.config_path,
        format!(
            "database: {}\npassword_file: ~amaharry/mapdn/admindn\n",
            env.database.display()
        ),
    )
    .unwrap();

    env.mapdn()
        .arg("-e")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'~user/' paths are not supported"));
}

#[test]
fn test_uri_database_setting_creates_nothing() {
    let env = TestEnv::new();
    let target = env.temp_dir.path().join("created.db");
    fs::write(
        &env.config_path,
        format!(
            "database: \"file:{}?mode=rwc\"\npassword_file: {}\n",
            target.display(),
            env.password_file.display()
        ),
    )
    .unwrap();

    env.mapdn()
        .arg("-e")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no such file"));

    assert!(!target.exists());
}
