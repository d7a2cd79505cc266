use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REPRESSILATOR: &str = r#"
VAR p 0 1
VAR q 0 1
VAR r 0 1

p(0,T) :- q(1,T-1).
p(1,T) :- q(0,T-1).
q(0,T) :- r(1,T-1).
q(1,T) :- r(0,T-1).
r(0,T) :- p(1,T-1).
r(1,T) :- p(0,T-1).
"#;

const LOOP_UP_DOWN: &str = "x0,x1,y0,y1
0,0,1,2
0,1,1,0
0,2,1,1
1,0,2,2
1,1,2,0
1,2,2,1
2,0,0,2
2,1,0,0
2,2,0,1
";

#[test]
fn test_cli_learn_from_program() {
    let temp_dir = TempDir::new().unwrap();
    let program = temp_dir.path().join("repressilator.lp");
    fs::write(&program, REPRESSILATOR).unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&program).arg("--state").arg("1,1,1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Learned 6 rules"))
        .stdout(predicate::str::contains("p(0,T) :- q(1,T-1)."))
        .stdout(predicate::str::contains("Precision: 100.00%"))
        .stdout(predicate::str::contains("Next values after [1,1,1]"));
}

#[test]
fn test_cli_learn_from_table_with_inferred_domain() {
    let temp_dir = TempDir::new().unwrap();
    let table = temp_dir.path().join("loop.csv");
    fs::write(&table, LOOP_UP_DOWN).unwrap();

    for algorithm in ["heuristic", "exhaustive"] {
        let mut cmd = Command::cargo_bin("lfit").unwrap();
        cmd.arg("learn").arg(&table).arg("--algorithm").arg(algorithm);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("VAR x0 0 1 2"))
            .stdout(predicate::str::contains("x0(1,T) :- x0(0,T-1)."))
            .stdout(predicate::str::contains("Precision: 100.00%"));
    }
}

#[test]
fn test_cli_learn_from_table_with_domain_file() {
    let temp_dir = TempDir::new().unwrap();
    let table = temp_dir.path().join("repressilator.csv");
    let program = temp_dir.path().join("repressilator.lp");
    fs::write(&program, REPRESSILATOR).unwrap();
    fs::write(
        &table,
        "x0,x1,x2,y0,y1,y2\n0,0,0,1,1,1\n1,1,1,0,0,0\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&table).arg("--domain").arg(&program);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VAR p 0 1"));
}

#[test]
fn test_cli_learn_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let program = temp_dir.path().join("repressilator.lp");
    fs::write(&program, REPRESSILATOR).unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&program).arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["completeness"]["status"], "complete");
    assert_eq!(report["program"]["rules"].as_array().unwrap().len(), 6);
}

#[test]
fn test_cli_learn_with_zero_timeout_is_partial() {
    let temp_dir = TempDir::new().unwrap();
    let program = temp_dir.path().join("repressilator.lp");
    fs::write(&program, REPRESSILATOR).unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&program).arg("--timeout-ms").arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Warning: deadline expired"));
}

#[test]
fn test_cli_learn_rejects_unknown_algorithm() {
    let temp_dir = TempDir::new().unwrap();
    let program = temp_dir.path().join("repressilator.lp");
    fs::write(&program, REPRESSILATOR).unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&program).arg("--algorithm").arg("magic");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm 'magic'"));
}

#[test]
fn test_cli_learn_reports_parse_errors() {
    let temp_dir = TempDir::new().unwrap();
    let program = temp_dir.path().join("broken.lp");
    fs::write(&program, "VAR a 0 1\na(1,T) :- b(0,T-1).\n").unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&program);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown variable 'b'"));
}

#[test]
fn test_cli_learn_reports_domain_violations() {
    let temp_dir = TempDir::new().unwrap();
    let table = temp_dir.path().join("wide.csv");
    let program = temp_dir.path().join("repressilator.lp");
    fs::write(&program, REPRESSILATOR).unwrap();
    fs::write(&table, "x0,x1,x2,y0,y1,y2\n0,0,2,1,1,1\n").unwrap();

    let mut cmd = Command::cargo_bin("lfit").unwrap();
    cmd.arg("learn").arg(&table).arg("--domain").arg(&program);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Domain violation"))
        .stderr(predicate::str::contains("'r'"));
}
