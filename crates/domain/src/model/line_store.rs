// crates/domain/src/model/line_store.rs
use std::path::Path;

use line_views_ports::source::LineSource;
use line_views_shared_kernel::{InfraResult, Line};

use crate::analytics::reverse::{self, ReverseLines};

/// Ordered, trimmed, non-blank lines of one text source.
///
/// Populated once by [`LineStore::load`] and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw text lines, dropping the ones that are blank after trimming.
    pub fn from_raw_lines<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { lines: raw.into_iter().filter_map(Line::new).collect() }
    }

    /// Replace the contents with the lines `source` yields for `path`.
    ///
    /// A path that is not a regular file leaves the store empty and is not an error.
    /// When the read fails part way, the lines read so far are kept and the failure
    /// is returned.
    pub fn load(&mut self, source: &impl LineSource, path: &Path) -> InfraResult<()> {
        let raw = source.read_lines(path);
        *self = Self::from_raw_lines(raw.lines);
        tracing::debug!(path = %path.display(), lines = self.count(), "line store loaded");

        match raw.failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line at `index`, or `None` outside `0..count()`.
    pub fn line_at(&self, index: i64) -> Option<&Line> {
        usize::try_from(index).ok().and_then(|i| self.lines.get(i))
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn reversed(&self) -> Vec<Line> {
        reverse::reversed_copy(&self.lines)
    }

    pub fn iter_rev(&self) -> ReverseLines<'_> {
        reverse::reverse_iter(&self.lines)
    }
}
