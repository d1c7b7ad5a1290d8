use crate::cli::Cli;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ipsae_batch::engine::progress::ProgressReporter;
use ipsae_batch::workflows::batch::{self, BatchSummary};
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;

    info!("Merging configuration from defaults, file and CLI arguments...");
    let config = build_config(args, &working_dir)?;

    let progress_handler = if args.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the batch scoring workflow...");
    let summary = batch::run(&config, &reporter)?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    println!(
        "Processed {} structure pairs: {} scored, {} failed.",
        summary.pairs_found, summary.pairs_scored, summary.pairs_failed
    );
    if summary.missing_structures > 0 {
        println!(
            "Skipped {} PAE file(s) without a matching structure file.",
            summary.missing_structures
        );
    }

    if !summary.has_results() {
        println!("No results to save!");
        return;
    }

    println!("Combined {} total rows.", summary.total_rows);
    for file in &summary.written {
        println!("Saved {} rows to {}", file.rows, file.path.display());
    }
}
