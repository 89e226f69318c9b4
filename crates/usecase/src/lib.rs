//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`report`]: the numbered report tasks, run in order over a loaded store
//! - [`lookup`]: integer tokens read interactively for line lookup
//! - [`messages`]: user-facing texts per locale
//!
//! Use cases depend on the domain, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod lookup;
pub mod messages;
pub mod report;

pub use messages::{Locale, Messages};
pub use report::{Report, TASKS, Task};
