use tracing::info;

use romcalc::{BatchParams, process_batch};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.input == args.output {
        return Err(AppError::SamePath { path: args.input });
    }

    let params = BatchParams {
        input: args.input,
        output: args.output,
    };

    info!("Processing expressions from {:?}", params.input);

    let report = process_batch(&params)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    println!(
        "Processing completed. Check '{}' for results.",
        params.output.display()
    );

    Ok(())
}
