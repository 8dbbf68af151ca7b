#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary with config lookups redirected to a scratch home.
pub fn rhy() -> Command {
    let home = env::temp_dir().join("rhydrolog_test_home");
    fs::create_dir_all(&home).ok();
    rhy_home(&home)
}

/// Binary using `home` as its configuration directory.
pub fn rhy_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rhydrolog");
    cmd.env("RHYDROLOG_HOME", home);
    cmd.env_remove("RHYDROLOG_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhydrolog.sqlite", name));
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

/// Initialize DB and log a small dataset on two fixed days
pub fn init_db_with_data(db_path: &str) {
    rhy()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (amount, date) in [
        ("500", "2025-09-01"),
        ("750", "2025-09-01"),
        ("300", "2025-09-15"),
    ] {
        rhy()
            .args(["--db", db_path, "add", amount, "--date", date])
            .assert()
            .success();
    }
}
