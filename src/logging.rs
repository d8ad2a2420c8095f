use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// events when `verbose` is set. Stdout stays reserved for the report.
pub fn init(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
