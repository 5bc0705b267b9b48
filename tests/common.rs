#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DISHES: &str = "פינוי מדיח";
pub const YARD: &str = "ניקוי חצר";

pub fn clg() -> Command {
    let mut cmd = cargo_bin_cmd!("chorelog");
    cmd.env_remove("CHORELOG_PASSWORD");
    cmd
}

fn temp_path(file: String) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(file);
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Unique test DB path inside the system temp dir, removed if present
pub fn setup_test_db(name: &str) -> String {
    temp_path(format!("{}_chorelog.sqlite", name))
}

/// Temporary output file path, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    temp_path(format!("{}_out.{}", name, ext))
}

/// Config file path that does not exist, so every run uses the defaults
/// instead of the user's own configuration.
pub fn no_config(name: &str) -> String {
    temp_path(format!("{}_missing.conf", name))
}

/// Write a config file with the given YAML body.
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_path(format!("{}_chorelog.conf", name));
    fs::write(&p, yaml).expect("write config");
    p
}

/// chorelog bound to a test database and default configuration
pub fn clg_db(name: &str, db_path: &str) -> Command {
    let mut cmd = clg();
    cmd.args(["--db", db_path, "--config", &no_config(name)]);
    cmd
}

/// Initialize a fresh test database
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    clg_db(name, &db_path)
        .args(["--test", "init"])
        .assert()
        .success();
    db_path
}

/// Submit one chore at a fixed local time
pub fn submit_at(name: &str, db_path: &str, who: &str, chore: &str, at: &str) -> assert_cmd::assert::Assert {
    clg_db(name, db_path)
        .args(["submit", "--name", who, "--chore", chore, "--at", at])
        .assert()
}
