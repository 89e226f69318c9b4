// tests/common/mod.rs
//! Shared test utilities

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding one input file.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// The binary under test with a clean language and log environment.
pub fn line_views() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_line_views"));
    cmd.env_remove("LINE_VIEWS_LANG").env_remove("RUST_LOG");
    cmd
}
