//! I/O layer for the batch driver.
//! Provides buffered line input, output sink creation with semantic
//! errors, and the one-line-per-record writer.
pub mod text;
pub use text::{RecordWriter, create_output, open_input};
