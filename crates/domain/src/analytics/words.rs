// crates/domain/src/analytics/words.rs
//! Word-level views over a sequence of lines.
//!
//! Every function here tokenizes again from scratch, so the result always
//! reflects the lines it is given.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap, HashSet},
};

use line_views_shared_kernel::Line;

/// Split every line on runs of whitespace, in line order.
pub fn tokenize(lines: &[Line]) -> impl Iterator<Item = &str> {
    lines.iter().flat_map(|line| line.split_whitespace())
}

/// Number of distinct words, compared case-sensitively.
pub fn count_distinct_words(lines: &[Line]) -> usize {
    tokenize(lines).collect::<HashSet<_>>().len()
}

/// Distinct words ordered by length, then by case-insensitive text.
///
/// Words that share both length and case-folded text collapse into the one
/// seen first ("Cat" and "cat" keep only the earlier of the two).
pub fn sort_words(lines: &[Line]) -> Vec<String> {
    let mut sorted = BTreeSet::new();
    for word in tokenize(lines) {
        sorted.insert(SortKey(word));
    }
    sorted.into_iter().map(|key| key.0.to_owned()).collect()
}

/// Occurrences of every word across all lines.
pub fn count_words(lines: &[Line]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    tally(&mut counts, tokenize(lines));
    counts
}

/// Same result as [`count_words`], with lines split across the rayon pool.
#[cfg(feature = "parallel")]
pub fn count_words_parallel(lines: &[Line]) -> HashMap<String, usize> {
    use rayon::prelude::*;

    lines
        .par_iter()
        .fold(HashMap::new, |mut acc, line| {
            tally(&mut acc, line.split_whitespace());
            acc
        })
        .reduce(HashMap::new, |mut left, right| {
            for (word, n) in right {
                *left.entry(word).or_insert(0) += n;
            }
            left
        })
}

fn tally<'a>(counts: &mut HashMap<String, usize>, words: impl Iterator<Item = &'a str>) {
    for word in words {
        match counts.get_mut(word) {
            Some(n) => *n += 1,
            None => {
                counts.insert(word.to_owned(), 1);
            }
        }
    }
}

/// Ordering key for [`sort_words`]: length in chars, then case-insensitive text.
///
/// Equality follows the ordering, so it is coarser than string equality.
#[derive(Debug, Clone, Copy)]
struct SortKey<'a>(&'a str);

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .chars()
            .count()
            .cmp(&other.0.chars().count())
            .then_with(|| cmp_ignore_case(self.0, other.0))
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey<'_> {}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}
