// crates/shared-kernel/tests/error_context.rs
use std::io;

use line_views_shared_kernel::{ApplicationError, ErrorContext, InfrastructureError, LineViewsError};

fn boom() -> std::result::Result<(), ApplicationError> {
    Err(ApplicationError::OutputFailed { task: 3, source: io::Error::other("pipe closed") })
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().context("printing report").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("printing report"));
    assert_eq!(display.matches("task 3").count(), 1);
    assert_eq!(display.matches("pipe closed").count(), 1);
    assert!(matches!(err, LineViewsError::Context { .. }));
}

#[test]
fn file_read_names_the_path() {
    let err = InfrastructureError::FileRead {
        path: "notes.txt".into(),
        source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };
    let display = LineViewsError::from(err).to_string();
    assert!(display.starts_with("Infrastructure error: Failed to read file 'notes.txt'"));
    assert!(display.ends_with("valid UTF-8"));
}
