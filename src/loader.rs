use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;
use crate::parser::{LogEntry, parse_line};

/// Entries in file order. Nothing is merged or deduplicated.
pub type LogCollection = Vec<LogEntry>;

/// Where the lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` means standard input, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

/// Load every entry from `source`.
pub fn load(source: &InputSource) -> Result<LogCollection, LoadError> {
    match source {
        InputSource::File(path) => load_file(path),
        InputSource::Stdin => {
            if atty::is(atty::Stream::Stdin) {
                return Err(LoadError::StdinIsTerminal);
            }
            let stdin = io::stdin();
            load_reader(stdin.lock())
        }
    }
}

/// Open `path` and load it, mapping open and read failures to
/// not-found, permission or generic I/O errors.
pub fn load_file(path: &Path) -> Result<LogCollection, LoadError> {
    debug!("Opening log file {}", path.display());
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    load_from(BufReader::new(file).lines()).map_err(|err| match err {
        LoadError::Io { source } => LoadError::from_io(path, source),
        other => other,
    })
}

pub fn load_reader<R: BufRead>(reader: R) -> Result<LogCollection, LoadError> {
    load_from(reader.lines())
}

/// Load from lines already in memory.
pub fn load_lines<I, S>(lines: I) -> Result<LogCollection, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_from(lines.into_iter().map(Ok))
}

/// Drive a fallible line source through the parser.
///
/// Blank lines are skipped. The first malformed line or read failure aborts
/// the whole load and nothing parsed so far is returned.
fn load_from<I, S>(lines: I) -> Result<LogCollection, LoadError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut entries = LogCollection::new();
    let mut skipped = 0usize;
    let mut lines_read = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        lines_read = idx + 1;
        let line = line.map_err(|source| LoadError::Io { source })?;
        let line = line.as_ref();

        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }

        let entry = parse_line(line).map_err(|source| LoadError::Malformed {
            line_number: idx + 1,
            source,
        })?;
        entries.push(entry);
    }

    debug!(
        lines = lines_read,
        entries = entries.len(),
        blank_lines = skipped,
        "Finished loading log entries"
    );
    Ok(entries)
}
