// crates/infra/src/persistence/mod.rs
pub mod file_reader;

pub use file_reader::TextFileReader;
