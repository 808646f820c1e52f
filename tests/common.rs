#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimediary::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtd() -> Command {
    cargo_bin_cmd!("rtimediary")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimediary.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Migrated database opened through the library API
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    rtimediary::db::initialize::init_db(&pool.conn).expect("init db");
    pool
}

/// Initialize DB and add a small dataset useful for many tests:
///
/// | id | date       | time        | name     | attributes   |
/// |----|------------|-------------|----------|--------------|
/// | 1  | 2025-09-01 | 09:00-10:30 | Gym      | sport        |
/// | 2  | 2025-09-01 | 10:00-12:00 | Standup  | work         |
/// | 3  | 2025-09-15 | 14:00-15:00 | Reading  | (none)       |
pub fn init_db_with_data(db_path: &str) {
    rtd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (name, color) in [("work", "#3366FF"), ("sport", "#FF6600")] {
        rtd()
            .args(["--db", db_path, "attr", "add", name, "--color", color])
            .assert()
            .success();
    }

    rtd()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-01",
            "--start",
            "09:00",
            "--end",
            "10:30",
            "--name",
            "Gym",
            "--notes",
            "leg day",
            "--attr",
            "sport",
        ])
        .assert()
        .success();

    rtd()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-01",
            "--start",
            "10:00",
            "--end",
            "12:00",
            "--name",
            "Standup",
            "--attr",
            "work",
        ])
        .assert()
        .success();

    rtd()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-15",
            "--start",
            "14:00",
            "--end",
            "15:00",
            "--name",
            "Reading",
        ])
        .assert()
        .success();
}
