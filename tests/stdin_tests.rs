use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_stdin_counts() {
    let mut cmd = Command::cargo_bin("logtally").unwrap();
    cmd.arg("-");

    cmd.write_stdin(
        "2024-01-01 10:00:00 INFO Service started\n\
         2024-01-01 10:05:00 ERROR Disk full\n\
         2024-01-01 10:06:00 ERROR Disk full again\n",
    );

    let assert = cmd.assert();

    assert
        .success()
        .stdout(predicate::str::contains("ERROR | 2"))
        .stdout(predicate::str::contains("INFO  | 1"));
}

#[test]
fn test_stdin_with_level() {
    let mut cmd = Command::cargo_bin("logtally").unwrap();
    cmd.arg("-").arg("error");

    cmd.write_stdin(
        "2024-01-01 10:00:00 INFO Service started\n\
         2024-01-01 10:05:00 ERROR Disk full\n",
    );

    let assert = cmd.assert();

    assert
        .success()
        .stdout(predicate::str::contains("Log details for level 'ERROR':"))
        .stdout(predicate::str::contains("2024-01-01 10:05:00 - Disk full"))
        .stdout(predicate::str::contains("Service started").not());
}

#[test]
fn test_stdin_empty_input() {
    let mut cmd = Command::cargo_bin("logtally").unwrap();
    cmd.arg("-");
    cmd.write_stdin("");

    let assert = cmd.assert();

    assert.success().stdout("Level | Count\n------|------\n");
}

#[test]
fn test_stdin_malformed_line() {
    let mut cmd = Command::cargo_bin("logtally").unwrap();
    cmd.arg("-");
    cmd.write_stdin("2024-01-01 10:00:00 INFO\n");

    let assert = cmd.assert();

    assert
        .failure()
        .stderr(predicate::str::contains("Invalid log format"));
}
