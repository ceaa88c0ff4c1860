//! High-level, ergonomic library API: evaluate expression text in memory,
//! stream a batch between a reader and a writer, and process files end to
//! end. Prefer these entrypoints over the low-level core modules when
//! integrating ROMCALC.
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::core::line::process_line;
use crate::core::params::BatchParams;
use crate::error::Result;
use crate::io::text::{RecordWriter, create_output, open_input};
use crate::types::OutputRecord;

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    /// Lines that evaluated to a word phrase.
    pub processed: usize,
    /// Blank lines, which produce no output.
    pub skipped: usize,
    /// Lines that produced an error phrase.
    pub errors: usize,
}

/// Serialize one record to its output line: the word phrase on success,
/// the error phrase otherwise.
pub fn record_text(record: OutputRecord) -> String {
    record.unwrap_or_else(|err| err.to_string())
}

/// Lazily evaluate every non-blank line of `input`, in input order.
///
/// Lines are trimmed first; blank lines produce no record. This is the
/// pure, I/O-free form of the batch driver.
pub fn evaluate_lines(input: &str) -> impl Iterator<Item = OutputRecord> + '_ {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(process_line)
}

/// Stream a batch from `input` to `output`: one record line per non-blank
/// input line, input order preserved, blank lines skipped.
///
/// Per-line faults are written into the output stream and counted in the
/// report; only I/O failures abort the run.
pub fn process_lines<R: BufRead, W: Write>(input: R, output: W) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut sink = RecordWriter::new(output);

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            report.skipped += 1;
            continue;
        }

        match process_line(line) {
            Ok(words) => {
                sink.write_record(&words)?;
                report.processed += 1;
            }
            Err(err) => {
                debug!("line {}: {:?} -> {}", number + 1, line, err);
                sink.write_record(&err.to_string())?;
                report.errors += 1;
            }
        }
    }

    sink.finish()?;
    Ok(report)
}

/// Process the `input` file to the `output` file.
///
/// The input is opened before the output is created, so a missing input
/// never truncates an existing output file.
pub fn process_file_to_path(input: &Path, output: &Path) -> Result<BatchReport> {
    let reader = open_input(input)?;
    let writer = create_output(output)?;
    process_lines(reader, writer)
}

/// Process a batch described by [`BatchParams`].
pub fn process_batch(params: &BatchParams) -> Result<BatchReport> {
    process_file_to_path(&params.input, &params.output)
}
