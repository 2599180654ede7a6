//! CSV output formatter

use super::common::escape_csv;
use super::Formatter;
use crate::error::Result;
use crate::pipeline::Projection;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn render(&self, _label: &str, projection: &Projection) -> Result<String> {
        let mut lines = Vec::with_capacity(projection.len() + 1);
        lines.push(projection.headers.join(","));
        for row in &projection.rows {
            lines.push(
                row.iter()
                    .map(|v| escape_csv(v))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        Ok(lines.join("\n"))
    }
}
