use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Open the input file for buffered line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) the output file for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Writes exactly one text line per record to the underlying sink.
pub struct RecordWriter<W: Write> {
    sink: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write one record followed by a newline.
    pub fn write_record(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.sink, "{text}")
    }

    /// Flush and hand back the underlying sink.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
