// crates/domain/src/analytics/reverse.rs
use std::iter::FusedIterator;

use line_views_shared_kernel::Line;

/// Materialized copy of `lines` in reverse order.
pub fn reversed_copy(lines: &[Line]) -> Vec<Line> {
    lines.iter().rev().cloned().collect()
}

/// Lazy last-to-first traversal of `lines`.
pub fn reverse_iter(lines: &[Line]) -> ReverseLines<'_> {
    ReverseLines { lines, remaining: lines.len() }
}

/// Iterator returned by [`reverse_iter`]. Read-only: it never touches the underlying lines.
#[derive(Debug, Clone)]
pub struct ReverseLines<'a> {
    lines: &'a [Line],
    remaining: usize,
}

impl<'a> Iterator for ReverseLines<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(&self.lines[self.remaining])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ReverseLines<'_> {}

impl FusedIterator for ReverseLines<'_> {}
