use rustc_hash::FxHashMap;
use tracing::debug;

use crate::parser::LogEntry;

/// Occurrences per level label. Only observed labels are present.
pub type LevelCounts = FxHashMap<String, usize>;

/// Count entries per distinct level label, as written.
pub fn count_by_level(entries: &[LogEntry]) -> LevelCounts {
    // Most logs carry a handful of levels
    let mut counts = LevelCounts::with_capacity_and_hasher(5, Default::default());

    for entry in entries {
        *counts.entry(entry.level().to_string()).or_insert(0) += 1;
    }

    debug!(levels = counts.len(), entries = entries.len(), "Counted entries by level");
    counts
}

/// The form a level query takes before it is compared against entries.
pub fn normalize_level(level: &str) -> String {
    level.to_uppercase()
}

/// Entries whose level equals the upper-cased query, in their original order.
///
/// Only the query is normalized. Stored levels are compared as written, so an
/// entry logged as `info` is never matched, whatever the query's case.
pub fn filter_by_level<'a>(entries: &'a [LogEntry], level: &str) -> Vec<&'a LogEntry> {
    let wanted = normalize_level(level);
    let matched: Vec<&LogEntry> = entries.iter().filter(|e| e.level() == wanted).collect();

    debug!(level = %wanted, matched = matched.len(), "Filtered entries by level");
    matched
}
