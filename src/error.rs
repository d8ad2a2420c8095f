use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single line that does not decompose into date, time, level and message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid log format: {line}")]
    MalformedLine { line: String },
}

/// Failures while turning a line source into a collection of entries.
///
/// Any of these aborts the whole load; no partial collection is ever handed back.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line_number}: {source}")]
    Malformed {
        /// 1-based physical line number, blank lines included
        line_number: usize,
        #[source]
        source: ParseError,
    },

    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("No permission to read '{}'.", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("File error: {source}")]
    Io {
        #[source]
        source: io::Error,
    },

    #[error("no input piped on standard input")]
    StdinIsTerminal,
}

impl LoadError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path: path.into() },
            _ => LoadError::Io { source },
        }
    }

    /// The raw line that failed to parse, if this is a format error.
    pub fn malformed_line(&self) -> Option<&str> {
        match self {
            LoadError::Malformed {
                source: ParseError::MalformedLine { line },
                ..
            } => Some(line),
            _ => None,
        }
    }
}

/// Top-level error returned by the binary's run loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
