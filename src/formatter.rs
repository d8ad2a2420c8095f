use crate::analyzer::{LevelCounts, normalize_level};
use crate::parser::LogEntry;
use serde::Serialize;
use std::io::{self, Write};

pub const DEFAULT_LEVEL_HEADER: &str = "Level";
pub const DEFAULT_COUNT_HEADER: &str = "Count";

/// Column titles of the count table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeaders {
    pub level: String,
    pub count: String,
}

impl Default for TableHeaders {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL_HEADER.to_string(),
            count: DEFAULT_COUNT_HEADER.to_string(),
        }
    }
}

// JSON shapes
#[derive(Serialize)]
struct CountsOutput<'a> {
    levels: Vec<LevelCount<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct LevelCount<'a> {
    level: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct DetailsOutput<'a> {
    level: String,
    count: usize,
    entries: &'a [&'a LogEntry],
}

/// Width of the level column: the header or the longest label, whichever is wider.
///
/// Measured in characters, which is what `{:<width$}` pads by.
pub fn level_column_width(counts: &LevelCounts, header: &str) -> usize {
    let longest_level = counts
        .keys()
        .map(|level| level.chars().count())
        .max()
        .unwrap_or(0);
    header.chars().count().max(longest_level)
}

fn sorted_counts(counts: &LevelCounts) -> Vec<(&str, usize)> {
    let mut rows: Vec<_> = counts.iter().map(|(l, c)| (l.as_str(), *c)).collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));
    rows
}

/// Render the per-level count table, levels in ascending order.
///
/// ```text
/// Level | Count
/// ------|------
/// ERROR | 2
/// INFO  | 1
/// ```
pub fn write_level_counts<W: Write>(
    counts: &LevelCounts,
    headers: &TableHeaders,
    writer: &mut W,
) -> io::Result<()> {
    let width = level_column_width(counts, &headers.level);

    writeln!(writer, "{:<width$} | {}", headers.level, headers.count)?;
    writeln!(
        writer,
        "{}-|{}",
        "-".repeat(width),
        "-".repeat(headers.count.chars().count() + 1)
    )?;

    for (level, count) in sorted_counts(counts) {
        writeln!(writer, "{:<width$} | {}", level, count)?;
    }

    Ok(())
}

/// Render the entries of one level as `date time - message` lines.
///
/// An empty selection prints a single notice and no listing. Entries are
/// written in the order given.
pub fn write_level_details<W: Write>(
    entries: &[&LogEntry],
    level: &str,
    writer: &mut W,
) -> io::Result<()> {
    let level = normalize_level(level);

    if entries.is_empty() {
        writeln!(writer, "No entries for level '{}'.", level)?;
        return Ok(());
    }

    writeln!(writer, "Log details for level '{}':", level)?;
    for entry in entries {
        writeln!(
            writer,
            "{} {} - {}",
            entry.date(),
            entry.time(),
            entry.message()
        )?;
    }

    Ok(())
}

pub fn write_level_counts_json<W: Write>(
    counts: &LevelCounts,
    writer: &mut W,
) -> serde_json::Result<()> {
    let levels: Vec<LevelCount> = sorted_counts(counts)
        .into_iter()
        .map(|(level, count)| LevelCount { level, count })
        .collect();
    let output = CountsOutput {
        total: levels.iter().map(|l| l.count).sum(),
        levels,
    };

    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer).map_err(serde_json::Error::io)
}

pub fn write_level_details_json<W: Write>(
    entries: &[&LogEntry],
    level: &str,
    writer: &mut W,
) -> serde_json::Result<()> {
    let output = DetailsOutput {
        level: normalize_level(level),
        count: entries.len(),
        entries,
    };

    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer).map_err(serde_json::Error::io)
}
