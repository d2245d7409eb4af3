#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sf() -> Command {
    cargo_bin_cmd!("shopfloor")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shopfloor.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the database schema
pub fn init_db(db_path: &str) {
    sf()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Create a worker account using the default worker code; returns nothing,
/// the first account created in a fresh DB gets id 1.
pub fn signup_worker(db_path: &str, username: &str, email: &str) {
    sf()
        .args([
            "--db",
            db_path,
            "--test",
            "signup",
            "--username",
            username,
            "--email",
            email,
            "--password",
            "pw",
            "--role",
            "worker",
            "--code",
            "FACTORY123",
        ])
        .assert()
        .success();
}

/// Create an admin account with the given code.
pub fn signup_admin(db_path: &str, username: &str, email: &str, code: &str) {
    sf()
        .args([
            "--db",
            db_path,
            "--test",
            "signup",
            "--username",
            username,
            "--email",
            email,
            "--password",
            "pw",
            "--role",
            "admin",
            "--code",
            code,
        ])
        .assert()
        .success();
}
