//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::found_line;
use super::Formatter;
use crate::error::Result;
use crate::pipeline::Projection;

/// Formatter for borderless table output followed by a result count
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn render(&self, label: &str, projection: &Projection) -> Result<String> {
        if projection.is_empty() {
            return Ok(found_line(label, 0));
        }

        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(
            projection
                .headers
                .iter()
                .map(|h| h.to_uppercase())
                .collect::<Vec<_>>(),
        );

        for row in &projection.rows {
            table.add_row(row);
        }

        Ok(format!("{}\n{}", table, found_line(label, projection.len())))
    }
}
