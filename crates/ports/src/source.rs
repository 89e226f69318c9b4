// crates/ports/src/source.rs
use std::path::Path;

use line_views_shared_kernel::InfrastructureError;

/// Outcome of reading a source line by line.
///
/// A failed read still carries every line that was read before the failure.
#[derive(Debug, Default)]
pub struct RawLines {
    pub lines: Vec<String>,
    pub failure: Option<InfrastructureError>,
}

impl RawLines {
    pub fn complete(lines: Vec<String>) -> Self {
        Self { lines, failure: None }
    }

    pub fn partial(lines: Vec<String>, failure: InfrastructureError) -> Self {
        Self { lines, failure: Some(failure) }
    }

    /// Nothing to read, e.g. the path is not a regular file.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Port for reading raw, untrimmed lines from a named source.
pub trait LineSource {
    fn read_lines(&self, path: &Path) -> RawLines;
}
