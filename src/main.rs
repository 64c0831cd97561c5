// src/main.rs

mod cli;
mod core;

use crate::cli::{Arguments, EXIT_INVALID_INPUT, ProgressFormat, exit_code_for_error};
use crate::core::{CollectionProgress, CollectionRequest, CollectionTask};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // Help and version requests land here too; only real usage
            // errors take the invalid-input exit code.
            let code = if error.use_stderr() {
                EXIT_INVALID_INPUT
            } else {
                0
            };
            let _ = error.print();
            return ExitCode::from(code);
        }
    };

    initialize_logging(args.verbose);

    let request = CollectionRequest::new(args.source, args.output, args.ext);
    let extension = request.extension.clone();
    log::info!(
        "Starting collection of '{extension}' files from {:?} into {:?}.",
        request.source_root,
        request.output_path
    );

    let task = CollectionTask::spawn(request);
    for update in task.progress().iter() {
        render_progress(&update, args.progress);
    }

    match task.join() {
        Ok(summary) => {
            println!("Processed {} {} files", summary.files_processed, extension);
            ExitCode::SUCCESS
        }
        Err(error) => {
            log::error!("Collection failed: {error}");
            ExitCode::from(exit_code_for_error(&error))
        }
    }
}

/// Initialize logging with the specified verbosity level. Log output goes
/// to stderr so stdout stays reserved for the final summary line.
fn initialize_logging(verbose: bool) {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger initialization failed; continuing without log output");
    }
}

fn render_progress(update: &CollectionProgress, format: ProgressFormat) {
    match format {
        ProgressFormat::Plain => eprintln!(
            "[{:>3}%] {}/{} files",
            update.percent(),
            update.files_processed,
            update.total_files
        ),
        ProgressFormat::Json => match serde_json::to_string(update) {
            Ok(line) => eprintln!("{line}"),
            Err(error) => log::warn!("Could not encode progress update: {error}"),
        },
    }
}
