//! Command Line Interface (CLI) layer for ROMCALC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the batch run. It wires
//! user-provided options to the underlying library functionality exposed
//! via `romcalc::api`.
//!
//! If you are embedding ROMCALC into another application, prefer using
//! the high-level `romcalc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
