use batch_resize::{BatchProcessor, Cli, Commands, ImageToolError, ProcessingResult};
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(&cli) {
        Ok(result) => {
            print_summary(&cli, &result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<ImageToolError>() {
                Some(err) if matches!(err, ImageToolError::DirectoryNotFound(_)) => {
                    println!("Error: {}", err)
                }
                _ => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ProcessingResult> {
    let config = cli.command.to_config();
    let processor = BatchProcessor::new(config)?.with_progress(cli.command.args().progress);
    let result = processor.process_directory()?;
    Ok(result)
}

fn print_summary(cli: &Cli, result: &ProcessingResult) {
    match &cli.command {
        Commands::Copy { suffix, .. } => println!(
            "Done! Created {} resized copies with suffix '{}'.",
            result.succeeded, suffix
        ),
        Commands::Overwrite { .. } => println!("Done! Overwrote {} images.", result.succeeded),
    }

    if result.failed() > 0 {
        log::warn!(
            "{} of {} images could not be processed",
            result.failed(),
            result.attempted
        );
    }
}
