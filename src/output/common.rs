//! Common utilities for output formatters

use std::collections::BTreeMap;

use crate::pipeline::Projection;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Result count line, e.g. "Found 2 VPCs."
pub fn found_line(label: &str, count: usize) -> String {
    if count > 1 {
        format!("Found {} {}.", count, plural(label))
    } else {
        format!("Found {} {}.", count, label)
    }
}

fn plural(label: &str) -> String {
    if label.ends_with("ss") {
        format!("{}es", label)
    } else {
        format!("{}s", label)
    }
}

/// Rows as objects keyed by column name
pub fn as_records(projection: &Projection) -> Vec<BTreeMap<&str, &str>> {
    projection
        .rows
        .iter()
        .map(|row| {
            projection
                .headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
        .collect()
}
