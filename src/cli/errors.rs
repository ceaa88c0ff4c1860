use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input and output must be different files, got: {path:?}")]
    SamePath { path: PathBuf },

    #[error("Processing error: {0}")]
    Processing(#[from] romcalc::Error),
}
