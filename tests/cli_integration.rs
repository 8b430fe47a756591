//! Integration tests for the `reg` binary.
//!
//! Each test runs the compiled binary with `HOME` and `XDG_CONFIG_HOME`
//! pointed at a temporary directory so no user configuration leaks in.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reg(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reg").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("REGISTRAR_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--cwd")
        .arg(home);
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    reg(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn catalog_lists_twenty_courses() {
    let dir = TempDir::new().unwrap();
    reg(dir.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 0  MATH 101"))
        .stdout(predicate::str::contains("19  BIO 401"));
}

#[test]
fn catalog_json() {
    let dir = TempDir::new().unwrap();
    let out = reg(dir.path())
        .args(["catalog", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 20);
    assert_eq!(entries[4]["name"], "CS 101");
}

#[test]
fn simulate_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let run = || {
        reg(dir.path())
            .args(["simulate", "--seed", "7", "--students", "30", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = run();
    assert_eq!(first, run());

    let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(value["seed"], 7);
    let report = &value["report"];
    let total: u64 = ["enrolled", "waitlisted", "rejected", "overflowed"]
        .iter()
        .map(|k| report[*k].as_u64().unwrap())
        .sum();
    assert_eq!(total, 30);
}

#[test]
fn simulate_single_course_text() {
    let dir = TempDir::new().unwrap();
    reg(dir.path())
        .args(["simulate", "--seed", "1", "--students", "10", "--course", "cs 101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS 101 ["))
        .stdout(predicate::str::contains("Enrolled Students:"))
        .stdout(predicate::str::contains("Seeded 10 students (seed 1)"));
}

#[test]
fn simulate_unknown_course_fails() {
    let dir = TempDir::new().unwrap();
    reg(dir.path())
        .args(["simulate", "--course", "ART 999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown course 'ART 999'"));
}

#[test]
fn zero_capacity_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    reg(dir.path())
        .args(["--capacity", "0", "simulate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be at least 1"));
}

#[test]
fn scripted_shell_session() {
    let dir = TempDir::new().unwrap();
    let script = "\
enroll\nAda\nLovelace\n1\n2\nMATH 101\nn\n\
enroll\nAlan\nTuring\n2\n3\n0\nn\n\
enroll\nGrace\nHopper\n3\n4\n0\nn\n\
drop 1 MATH 101\n\
list MATH 101\n\
quit\n";

    reg(dir.path())
        .args(["shell", "--no-interactive"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enrollment successful for Ada Lovelace in MATH 101.",
        ))
        .stdout(predicate::str::contains(
            "MATH 101 is full. Grace Hopper added to waitlist.",
        ))
        .stdout(predicate::str::contains(
            "Student 1 dropped from MATH 101. Student 3 promoted from the waitlist.",
        ))
        .stdout(predicate::str::contains("MATH 101 [2/2 enrolled, waitlist 0/4]"))
        .stdout(predicate::str::contains("reg>").not());
}

#[test]
fn project_config_limits_apply() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".registrar")).unwrap();
    fs::write(
        dir.path().join(".registrar/config.toml"),
        "capacity = 1\nwaitlist_capacity = 0\n",
    )
    .unwrap();

    reg(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity = 1"))
        .stdout(predicate::str::contains("waitlist_capacity = 0"))
        .stdout(predicate::str::contains("project config: "));

    reg(dir.path())
        .args(["shell", "--no-interactive"])
        .write_stdin("enroll\nA\nAdams\n1\n1\n0\ny\nB\nBaker\n2\n1\n0\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "MATH 101 and its waitlist are full. B Baker was not added.",
        ));
}

#[test]
fn compat_config_location_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("registrar.toml"), "capacity = 3\n").unwrap();

    reg(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity = 3"))
        .stderr(predicate::str::contains("deprecated config location"));
}

#[test]
fn config_init_writes_once() {
    let dir = TempDir::new().unwrap();

    reg(dir.path())
        .args(["--capacity", "30", "config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = fs::read_to_string(dir.path().join(".registrar/config.toml")).unwrap();
    assert!(written.contains("capacity = 30"));

    reg(dir.path())
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".registrar")).unwrap();
    fs::write(dir.path().join(".registrar/config.toml"), "colour = \"red\"\n").unwrap();

    reg(dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn completion_bash() {
    let dir = TempDir::new().unwrap();
    reg(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_reg"));
}
