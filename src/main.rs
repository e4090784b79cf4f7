/*!
 * Command-line interface for fullcode
 */

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use env_logger::Env;

use fullcode::config::{Args, Config};
use fullcode::error::FullcodeError;
use fullcode::report::{ReportFormat, Reporter, RunReport};
use fullcode::writer::{Destination, OutputWriter};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "fullcode", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(FullcodeError::Clipboard(e)) => {
            println!("{}", e);
            println!("Failed to copy aggregated content to the clipboard.");
            ExitCode::FAILURE
        }
        Err(e @ FullcodeError::PathNotFound(_)) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> fullcode::Result<()> {
    println!("Excluding extensions: {}", args.excluded_extensions().join(", "));

    // Create and validate configuration
    let config = Config::from_args(args)?;

    config.validate()?;

    let start_time = Instant::now();

    let snapshot = fullcode::build_snapshot(&config)?;
    let destination = OutputWriter::new(config).write(&snapshot.text)?;

    match &destination {
        Destination::Clipboard => {
            println!("Aggregated content has been copied to the clipboard successfully.")
        }
        Destination::File(name) => {
            println!("Full code file '{}' has been created successfully.", name)
        }
    }

    let report = RunReport {
        destination: destination.to_string(),
        duration: start_time.elapsed(),
        statistics: snapshot.statistics,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
