use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "romcalc", version, about = "ROMCALC CLI")]
pub struct CliArgs {
    /// Input text file with one expression per line (`<numeral> <op> <numeral>`)
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Output text file receiving one result line per non-blank expression
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
