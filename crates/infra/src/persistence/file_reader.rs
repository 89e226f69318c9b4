// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use line_views_ports::source::{LineSource, RawLines};
use line_views_shared_kernel::InfrastructureError;

/// Reads text files from the local filesystem, one raw line at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFileReader;

impl TextFileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Collect lines from `reader` until EOF or the first error.
    pub fn collect_lines<R: BufRead>(reader: R, path: &Path) -> RawLines {
        let mut lines = Vec::new();
        for line in reader.lines() {
            match line {
                Ok(line) => lines.push(line),
                Err(source) => {
                    let failure = InfrastructureError::FileRead { path: path.to_path_buf(), source };
                    return RawLines::partial(lines, failure);
                }
            }
        }
        RawLines::complete(lines)
    }
}

impl LineSource for TextFileReader {
    fn read_lines(&self, path: &Path) -> RawLines {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "not a regular file, nothing to read");
            return RawLines::empty();
        }

        match Self::open_buffered(path) {
            Ok(reader) => Self::collect_lines(reader, path),
            Err(source) => RawLines::partial(Vec::new(), InfrastructureError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
