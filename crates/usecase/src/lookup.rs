// crates/usecase/src/lookup.rs
use std::{collections::VecDeque, io::BufRead};

use line_views_shared_kernel::InfrastructureError;

/// Whitespace-separated integers read from `input`, one line at a time.
///
/// Ends at EOF, at the first token that is not an `i64`, or when reading fails.
/// Several numbers on one input line come out one by one, and input is only
/// pulled when the buffered tokens run out.
pub struct IntTokens<R> {
    input: R,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> IntTokens<R> {
    pub fn new(input: R) -> Self {
        Self { input, pending: VecDeque::new(), done: false }
    }

    fn refill(&mut self) -> bool {
        let mut buf = String::new();
        while self.pending.is_empty() {
            buf.clear();
            match self.input.read_line(&mut buf) {
                Ok(0) => return false,
                Ok(_) => self.pending.extend(buf.split_whitespace().map(str::to_owned)),
                Err(source) => {
                    let err = InfrastructureError::StdinRead { source };
                    tracing::warn!(error = %err, "stopping line lookup");
                    return false;
                }
            }
        }
        true
    }
}

impl<R: BufRead> Iterator for IntTokens<R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done || (self.pending.is_empty() && !self.refill()) {
            self.done = true;
            return None;
        }
        let parsed = self.pending.pop_front().and_then(|token| token.parse().ok());
        if parsed.is_none() {
            self.done = true;
        }
        parsed
    }
}
