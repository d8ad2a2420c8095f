use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

use logtally::cli::Args;
use logtally::error::{AppError, LoadError};
use logtally::{load, logging, render};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let source = args.source();
    let command = args.command();
    debug!(?source, ?command, "Starting analysis");

    // Load fully before printing anything; a malformed line means no report at all
    let entries = load(&source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&entries, &command, &args.report_config(), &mut out)?;
    out.flush()?;

    Ok(())
}

fn report_error(err: &AppError) {
    match err {
        AppError::Load(LoadError::StdinIsTerminal) => {
            eprintln!("Error: {}", err);
            eprintln!("Usage: logtally <log_file_path> [log_level]  (use '-' with piped input)");
        }
        AppError::Load(_) | AppError::Json(_) | AppError::Logging(_) => {
            eprintln!("Error: {}", err);
        }
        // Broken pipe on stdout is not worth a message
        AppError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        AppError::Output(_) => {
            eprintln!("Error: {}", err);
        }
    }
}
