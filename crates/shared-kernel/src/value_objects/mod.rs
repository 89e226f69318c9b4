// crates/shared-kernel/src/value_objects/mod.rs
pub mod line;

pub use line::Line;
