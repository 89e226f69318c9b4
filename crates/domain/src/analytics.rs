pub mod reverse;
pub mod words;

pub use reverse::{ReverseLines, reverse_iter, reversed_copy};
pub use words::{count_distinct_words, count_words, sort_words, tokenize};

#[cfg(feature = "parallel")]
pub use words::count_words_parallel;
