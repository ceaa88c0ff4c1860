//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Covers the fatal failure surface only: unopenable input,
//! uncreatable output, and mid-stream I/O failures. Per-line faults are not
//! errors at this level; they become [`crate::types::LineError`] records in
//! the output stream.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open input file {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output file {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
