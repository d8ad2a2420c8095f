use logtally::analyzer::{LevelCounts, count_by_level, filter_by_level};
use logtally::formatter::{
    TableHeaders, level_column_width, write_level_counts, write_level_details,
};
use logtally::loader::{LogCollection, load_lines};

fn scenario_entries() -> LogCollection {
    load_lines([
        "2024-01-01 10:00:00 INFO Service started",
        "2024-01-01 10:05:00 ERROR Disk full",
        "2024-01-01 10:06:00 ERROR Disk full again",
    ])
    .unwrap()
}

fn counts_of(pairs: &[(&str, usize)]) -> LevelCounts {
    pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
}

fn render_counts(counts: &LevelCounts, headers: &TableHeaders) -> String {
    let mut output = Vec::new();
    write_level_counts(counts, headers, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_count_table_scenario() {
    let counts = count_by_level(&scenario_entries());
    let output = render_counts(&counts, &TableHeaders::default());

    assert_eq!(
        output,
        "Level | Count\n\
         ------|------\n\
         ERROR | 2\n\
         INFO  | 1\n"
    );
}

#[test]
fn test_count_table_sorted_regardless_of_input_order() {
    let entries = load_lines([
        "2024-01-01 10:00:00 WARNING c",
        "2024-01-01 10:00:00 DEBUG a",
        "2024-01-01 10:00:00 INFO b",
        "2024-01-01 10:00:00 ERROR d",
    ])
    .unwrap();
    let output = render_counts(&count_by_level(&entries), &TableHeaders::default());

    let labels: Vec<&str> = output
        .lines()
        .skip(2)
        .map(|row| row.split(" | ").next().unwrap().trim_end())
        .collect();
    assert_eq!(labels, vec!["DEBUG", "ERROR", "INFO", "WARNING"]);
}

#[test]
fn test_level_column_widens_for_long_labels() {
    let counts = counts_of(&[("CRITICAL", 4), ("INFO", 10)]);
    let output = render_counts(&counts, &TableHeaders::default());

    assert_eq!(
        output,
        "Level    | Count\n\
         ---------|------\n\
         CRITICAL | 4\n\
         INFO     | 10\n"
    );
}

#[test]
fn test_custom_headers() {
    let headers = TableHeaders {
        level: "Severity level".to_string(),
        count: "N".to_string(),
    };
    let counts = counts_of(&[("INFO", 1)]);

    assert_eq!(
        render_counts(&counts, &headers),
        "Severity level | N\n\
         ---------------|--\n\
         INFO           | 1\n"
    );
}

#[test]
fn test_width_counts_characters_not_bytes() {
    let headers = TableHeaders {
        level: "Рівень".to_string(),
        count: "К".to_string(),
    };
    let counts = counts_of(&[("INFO", 1)]);

    assert_eq!(level_column_width(&counts, &headers.level), 6);
    assert_eq!(
        render_counts(&counts, &headers),
        "Рівень | К\n\
         -------|--\n\
         INFO   | 1\n"
    );
}

#[test]
fn test_level_column_width() {
    assert_eq!(level_column_width(&LevelCounts::default(), "Level"), 5);
    assert_eq!(level_column_width(&LevelCounts::default(), ""), 0);
    assert_eq!(level_column_width(&counts_of(&[("WARNING", 1)]), "Lvl"), 7);
}

#[test]
fn test_empty_counts_render_header_only() {
    let output = render_counts(&LevelCounts::default(), &TableHeaders::default());
    assert_eq!(output, "Level | Count\n------|------\n");
}

#[test]
fn test_details_scenario() {
    let entries = scenario_entries();
    let matched = filter_by_level(&entries, "info");

    let mut output = Vec::new();
    write_level_details(&matched, "info", &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Log details for level 'INFO':\n\
         2024-01-01 10:00:00 - Service started\n"
    );
}

#[test]
fn test_details_keep_collection_order() {
    let entries = scenario_entries();
    let mut matched = filter_by_level(&entries, "ERROR");
    matched.reverse();

    let mut output = Vec::new();
    write_level_details(&matched, "ERROR", &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "2024-01-01 10:06:00 - Disk full again");
    assert_eq!(lines[2], "2024-01-01 10:05:00 - Disk full");
}

#[test]
fn test_details_empty_prints_notice_only() {
    let entries = scenario_entries();
    let matched = filter_by_level(&entries, "WARNING");

    let mut output = Vec::new();
    write_level_details(&matched, "WARNING", &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "No entries for level 'WARNING'.\n");
    assert!(!output.contains("Log details"));
    assert!(!output.contains('|'));
}
