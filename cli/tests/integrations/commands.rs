use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SWITCH: &str = r#"
% gene switched on by a signal
VAR signal absent present
VAR gene off on

signal(absent,T) :- signal(absent,T-1).
signal(present,T) :- signal(present,T-1).
gene(on,T) :- signal(present,T-1).
gene(off,T) :- signal(absent,T-1).
"#;

fn write_switch(temp_dir: &TempDir) -> std::path::PathBuf {
    let program = temp_dir.path().join("switch.lp");
    fs::write(&program, SWITCH).unwrap();
    program
}

#[test]
fn test_cli_generate_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let program = write_switch(&temp_dir);

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("generate").arg(&program);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("x0,x1,y0,y1\n0,0,0,0\n"))
        .stdout(predicate::str::contains("1,0,1,1"));
}

#[test]
fn test_cli_generate_to_file_then_precision() {
    let temp_dir = TempDir::new().unwrap();
    let program = write_switch(&temp_dir);
    let table = temp_dir.path().join("switch.csv");

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("generate").arg(&program).arg("-o").arg(&table);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 transitions"));

    let written = fs::read_to_string(&table).unwrap();
    assert_eq!(written.lines().count(), 5);

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("precision").arg(&program).arg(&table);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Precision: 100.00%"));
}

#[test]
fn test_cli_precision_against_different_table() {
    let temp_dir = TempDir::new().unwrap();
    let program = write_switch(&temp_dir);
    let table = temp_dir.path().join("other.csv");
    // the gene never switches on
    fs::write(&table, "x0,x1,y0,y1\n1,0,1,0\n1,1,1,0\n").unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("precision").arg(&program).arg(&table);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Precision: 50.00%"));
}

#[test]
fn test_cli_next_by_value_name() {
    let temp_dir = TempDir::new().unwrap();
    let program = write_switch(&temp_dir);

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("next").arg(&program).arg("present,off");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Next values after [1,0]"))
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("on"));
}

#[test]
fn test_cli_next_rejects_bad_state() {
    let temp_dir = TempDir::new().unwrap();
    let program = write_switch(&temp_dir);

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("next").arg(&program).arg("present");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: state 'present' has 1 values"));

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("next").arg(&program).arg("0,7");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Domain violation"));
}

#[test]
fn test_cli_show() {
    let temp_dir = TempDir::new().unwrap();
    let program = write_switch(&temp_dir);

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("show").arg(&program);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 variables, 4 rules, delay 1"))
        .stdout(predicate::str::contains("absent present"))
        .stdout(predicate::str::contains("gene(on,T)"))
        .stdout(predicate::str::contains("signal(present,T-1)"));
}

#[test]
fn test_cli_list() {
    let temp_dir = TempDir::new().unwrap();
    write_switch(&temp_dir);
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("toggle.lp"), "VAR a 0 1\na(1,T) :- a(0,T-1).\n").unwrap();
    fs::write(nested.join("notes.txt"), "not a program").unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workspace contains 2 programs"))
        .stdout(predicate::str::contains("switch.lp: 2 variables, 4 rules"))
        .stdout(predicate::str::contains("toggle.lp: 1 variables, 1 rules"));
}

#[test]
fn test_cli_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("show").arg(temp_dir.path().join("missing.lp"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
