// crates/usecase/src/report.rs
use std::io::{self, BufRead, Write};

use line_views_domain::{LineStore, analytics};
use line_views_shared_kernel::{ApplicationError, ApplicationResult};

use crate::{
    lookup::IntTokens,
    messages::{Locale, Messages, SEPARATOR},
};

/// One numbered section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    DistinctWords,
    SortedWords,
    WordCounts,
    ReversedFile,
    ReverseIterator,
    LineLookup,
}

/// Sections in print order; a task's number is its position plus one.
pub const TASKS: [Task; 6] = [
    Task::DistinctWords,
    Task::SortedWords,
    Task::WordCounts,
    Task::ReversedFile,
    Task::ReverseIterator,
    Task::LineLookup,
];

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Self::DistinctWords => "distinct-words",
            Self::SortedWords => "sorted-words",
            Self::WordCounts => "word-counts",
            Self::ReversedFile => "reversed-file",
            Self::ReverseIterator => "reverse-iterator",
            Self::LineLookup => "line-lookup",
        }
    }
}

/// Prints every task of [`TASKS`] for one loaded store.
pub struct Report<'a> {
    store: &'a LineStore,
    messages: &'static Messages,
}

impl<'a> Report<'a> {
    pub fn new(store: &'a LineStore, locale: Locale) -> Self {
        Self { store, messages: locale.messages() }
    }

    /// Run all tasks in order. `input` feeds the interactive line lookup.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> ApplicationResult<()> {
        for (position, task) in TASKS.into_iter().enumerate() {
            let number = position + 1;
            tracing::debug!(number, task = task.name(), "running task");
            self.run_task(task, number, &mut input, out)
                .map_err(|source| ApplicationError::OutputFailed { task: number, source })?;
        }
        Ok(())
    }

    fn run_task<R: BufRead, W: Write>(&self, task: Task, number: usize, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.header(number))?;
        match task {
            Task::DistinctWords => self.distinct_words(out)?,
            Task::SortedWords => self.sorted_words(out)?,
            Task::WordCounts => self.word_counts(out)?,
            Task::ReversedFile => self.reversed_file(out)?,
            Task::ReverseIterator => self.reverse_iterator(out)?,
            Task::LineLookup => self.line_lookup(input, out)?,
        }
        writeln!(out, "{SEPARATOR}")
    }

    fn distinct_words<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let distinct = analytics::count_distinct_words(self.store.lines());
        writeln!(out, "{}{distinct}", self.messages.distinct_words)
    }

    fn sorted_words<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.sorted_words)?;
        for word in analytics::sort_words(self.store.lines()) {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }

    fn word_counts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.word_counts)?;
        #[cfg(feature = "parallel")]
        let counts = analytics::count_words_parallel(self.store.lines());
        #[cfg(not(feature = "parallel"))]
        let counts = analytics::count_words(self.store.lines());

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable();
        for (word, n) in counts {
            writeln!(out, "{word}:{n}")?;
        }
        Ok(())
    }

    fn reversed_file<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.reversed_file)?;
        for line in self.store.reversed() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn reverse_iterator<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.original_file)?;
        for line in self.store.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", self.messages.reversed_by_iterator)?;
        for line in self.store.iter_rev() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn line_lookup<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.original_file)?;
        for (index, line) in self.store.lines().iter().enumerate() {
            writeln!(out, "{index} {line}")?;
        }

        writeln!(out, "{}", self.messages.line_prompt)?;
        out.flush()?;
        for index in IntTokens::new(input) {
            match self.store.line_at(index) {
                Some(line) => writeln!(out, "{line}")?,
                None => writeln!(out, "{}", self.messages.no_such_line)?,
            }
            writeln!(out, "{}", self.messages.line_prompt)?;
            out.flush()?;
        }
        Ok(())
    }
}
