use predicates::prelude::*;

use crate::common::{Fixture, line_views};

const SAMPLE: &str = "the cat\n\n   The Dog  \r\n\t\ncat\n";

#[test]
fn prints_all_six_sections_in_order() {
    let fixture = Fixture::new();
    let path = fixture.write("sample.txt", SAMPLE);

    let output = line_views().arg(&path).write_stdin("").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let headers: Vec<_> = stdout.lines().filter(|l| l.starts_with("Task #")).collect();
    assert_eq!(headers, ["Task #1", "Task #2", "Task #3", "Task #4", "Task #5", "Task #6"]);
    assert!(stdout.contains("Number of distinct words in the file: 4\n"));
    assert!(stdout.contains("Sorted list:\ncat\nDog\nthe\n"));
    assert!(stdout.contains("Word count:\nDog:1\nThe:1\ncat:2\nthe:1\n"));
    assert!(stdout.contains("File in reverse order:\ncat\nThe Dog\nthe cat\n"));
    assert!(stdout.contains("File in reverse order using iterator:\ncat\nThe Dog\nthe cat\n"));
    assert!(stdout.contains("0 the cat\n1 The Dog\n2 cat\n"));
}

#[test]
fn interactive_lookup_until_garbage() {
    let fixture = Fixture::new();
    let path = fixture.write("sample.txt", SAMPLE);

    let output = line_views().arg(&path).write_stdin("1 7 -1 x 0\n").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let tail = stdout.split("2 cat\n").nth(1).unwrap();
    assert_eq!(
        tail,
        "Enter a line number:\nThe Dog\nEnter a line number:\nNo such line.\nEnter a line number:\nNo such line.\nEnter a line number:\n----------------------------------\n"
    );
}

#[test]
fn path_can_come_from_stdin() {
    let fixture = Fixture::new();
    let path = fixture.write("sample.txt", SAMPLE);

    line_views()
        .write_stdin(format!("{}\n2\n", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter file name:\nTask #1\n"))
        .stdout(predicate::str::contains("Enter a line number:\ncat\n"));
}

#[test]
fn russian_report() {
    let fixture = Fixture::new();
    let path = fixture.write("sample.txt", SAMPLE);

    line_views()
        .env("LINE_VIEWS_LANG", "ru")
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Задание №1\nКоличество различных слов в файле: 4\n"))
        .stdout(predicate::str::contains("Файл в обратном порядке используя итератор:"));
}

#[test]
fn invalid_utf8_keeps_earlier_lines() {
    let fixture = Fixture::new();
    let mut bytes = b"alpha beta\ngamma\n".to_vec();
    bytes.extend_from_slice(&[0xc3, 0x28, b'\n', b'z', b'\n']);
    let path = fixture.write("broken.txt", bytes);

    line_views()
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to read file"))
        .stdout(predicate::str::contains("Number of distinct words in the file: 3\n"))
        .stdout(predicate::str::contains("0 alpha beta\n1 gamma\n"))
        .stderr(predicate::str::contains("partially"));
}

#[test]
fn non_utf8_file_name_on_stdin_still_reports() {
    let output = line_views().write_stdin(vec![0xff, b'x', b'\n']).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Enter file name:\nTask #1\n"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Task #")).count(), 6);
}
