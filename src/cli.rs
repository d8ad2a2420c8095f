use clap::Parser;

use crate::formatter::{DEFAULT_COUNT_HEADER, DEFAULT_LEVEL_HEADER, TableHeaders};
use crate::loader::InputSource;

#[derive(Parser, Debug)]
#[clap(name = "logtally")]
#[clap(about = "Logtally: count log entries by level, or list one level", long_about = None)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log file to analyze ("-" reads standard input)
    pub file: String,

    /// Show the entries of this level instead of the count table (case-insensitive)
    pub level: Option<String>,

    /// Output results in JSON format
    #[clap(long)]
    pub json: bool,

    /// Header of the level column in the count table
    #[clap(long, default_value = DEFAULT_LEVEL_HEADER)]
    pub level_header: String,

    /// Header of the count column in the count table
    #[clap(long, default_value = DEFAULT_COUNT_HEADER)]
    pub count_header: String,

    /// Print debug diagnostics to stderr
    #[clap(short, long)]
    pub verbose: bool,
}

/// What to produce from the loaded entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count table over all levels
    Counts,
    /// Detail listing of a single level
    Details { level: String },
}

/// How the report is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportConfig {
    pub headers: TableHeaders,
    pub json: bool,
}

impl Args {
    pub fn source(&self) -> InputSource {
        InputSource::from_arg(&self.file)
    }

    pub fn command(&self) -> Command {
        match &self.level {
            Some(level) => Command::Details {
                level: level.clone(),
            },
            None => Command::Counts,
        }
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            headers: TableHeaders {
                level: self.level_header.clone(),
                count: self.count_header.clone(),
            },
            json: self.json,
        }
    }
}
