use predicates::prelude::*;

use crate::common::{Fixture, line_views};

#[test]
fn shows_help() {
    line_views()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_views"))
        .stdout(predicate::str::contains("--lang"));
}

#[test]
fn shows_version() {
    line_views()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_file_prints_empty_report() {
    let fixture = Fixture::new();
    let path = fixture.missing("nope.txt");

    line_views()
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of distinct words in the file: 0"))
        .stdout(predicate::str::contains("Task #6"))
        .stdout(predicate::str::contains("Failed to read").not());
}

#[test]
fn directory_is_treated_as_no_data() {
    let fixture = Fixture::new();
    let dir = fixture.missing("");

    line_views()
        .arg(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No such line."));
}
