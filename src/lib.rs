pub mod analyzer;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod loader;
pub mod logging;
pub mod parser;

use std::io::Write;

// Re-export key types for convenience
pub use analyzer::{LevelCounts, count_by_level, filter_by_level};
pub use cli::{Args, Command, ReportConfig};
pub use error::{AppError, LoadError, ParseError};
pub use loader::{InputSource, LogCollection, load, load_file, load_lines, load_reader};
pub use parser::{LogEntry, parse_line};

/// Aggregate or filter `entries` according to `command` and render the result.
pub fn render<W: Write>(
    entries: &[LogEntry],
    command: &Command,
    config: &ReportConfig,
    writer: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Counts => {
            let counts = count_by_level(entries);
            if config.json {
                formatter::write_level_counts_json(&counts, writer)?;
            } else {
                formatter::write_level_counts(&counts, &config.headers, writer)?;
            }
        }
        Command::Details { level } => {
            let matched = filter_by_level(entries, level);
            if config.json {
                formatter::write_level_details_json(&matched, level, writer)?;
            } else {
                formatter::write_level_details(&matched, level, writer)?;
            }
        }
    }

    Ok(())
}
