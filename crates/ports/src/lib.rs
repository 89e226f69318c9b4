//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where the raw lines of a text come from
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;
