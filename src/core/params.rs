use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Batch run parameters suitable for config files and presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchParams {
    /// Text file with one expression per line.
    pub input: PathBuf,
    /// Text file receiving one result line per non-blank expression.
    pub output: PathBuf,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
        }
    }
}
