#![doc = r#"
ROMCALC — a batch calculator for Roman numeral arithmetic.

This crate reads lines of the form `<numeral> <op> <numeral>` (for example
`IV + V`), evaluates them with signed 64-bit arithmetic, and renders each
result as capitalized English words (`Nine`). Malformed lines become fixed
error phrases in the output stream instead of aborting the run. It powers
the ROMCALC CLI and can be embedded in your own Rust applications.

Input format
------------
One expression per line, three whitespace-delimited tokens: a Roman
numeral, a single-character operator (`+ - * /`), and a second numeral.
Numerals are validated only for symbol-set membership ({I,V,X,L,C,D,M}),
so lax spellings like `IIII` are accepted and decoded deterministically
with the standard subtractive right-to-left scan. Blank lines are skipped.
Division truncates toward zero.

Add dependency
--------------
```toml
[dependencies]
romcalc = "0.1"
```

Quick start: process a file batch
---------------------------------
```rust,no_run
use std::path::Path;
use romcalc::process_file_to_path;

fn main() -> romcalc::Result<()> {
    let report = process_file_to_path(Path::new("input.txt"), Path::new("output.txt"))?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Batch presets
-------------
`BatchParams` captures a run for config files and presets; its defaults are
the classic `input.txt` / `output.txt` pair.

```rust,no_run
use romcalc::{BatchParams, process_batch};

fn main() -> romcalc::Result<()> {
    let params = BatchParams::default();
    let report = process_batch(&params)?;
    println!("processed={}", report.processed);
    Ok(())
}
```

Evaluate in memory
------------------
```rust
use romcalc::{evaluate_lines, record_text};

let input = "IV + V\nX / I\nV $ X";
let lines: Vec<String> = evaluate_lines(input).map(record_text).collect();
assert_eq!(lines, ["Nine", "Ten", "Invalid operation"]);
```

Or stream between any reader and writer:

```rust
use romcalc::process_lines;

let input = b"IV + V\n\nABCD + V\n";
let mut output = Vec::new();
let report = process_lines(&input[..], &mut output)?;
assert_eq!(output, b"Nine\nInvalid Roman numeral\n");
assert_eq!(report.processed, 1);
assert_eq!(report.skipped, 1);
assert_eq!(report.errors, 1);
# Ok::<(), romcalc::Error>(())
```

Error handling
--------------
Per-line faults never abort a batch; they are written into the output
stream as fixed phrases (`Invalid input`, `Invalid Roman numeral`,
`Division by zero error`, `Invalid operation`, `Arithmetic overflow`) and
counted in the report. Fatal errors are the I/O surface only; match on
[`Error`] to handle specific cases.

```rust,no_run
use std::path::Path;
use romcalc::{Error, process_file_to_path};

fn main() {
    match process_file_to_path(Path::new("input.txt"), Path::new("output.txt")) {
        Ok(report) => println!("processed={}", report.processed),
        Err(Error::OpenInput { path, .. }) => eprintln!("no input file at {path:?}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — the `Operator` and per-line `LineError` record taxonomy.
- [`core`] — numeral decoding, word rendering, line evaluation.
- [`io`] — line sources and record sinks.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::BatchParams;
pub use crate::error::{Error, Result};
pub use crate::types::{LineError, Operator, OutputRecord};

// Core primitives
pub use crate::core::line::process_line;
pub use crate::core::roman::{is_valid_roman, roman_to_decimal, symbol_value};
pub use crate::core::words::number_to_words;

// I/O helpers
pub use crate::io::text::{RecordWriter, create_output, open_input};

// High-level API re-exports
pub use crate::api::{
    BatchReport, evaluate_lines, process_batch, process_file_to_path, process_lines, record_text,
};
