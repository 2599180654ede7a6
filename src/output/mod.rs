//! Output formatting module
//!
//! Renders projected rows as table, CSV, JSON or YAML.

mod common;
mod csv;
mod json;
mod table;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::pipeline::{project, Fields, Projection};

pub use self::common::{escape_csv, found_line};
pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render projected rows; `label` names one item (e.g. "VPC")
    fn render(&self, label: &str, projection: &Projection) -> Result<String>;
}

fn formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Render already projected rows
pub fn render_projection(label: &str, projection: &Projection, format: OutputFormat) -> Result<String> {
    formatter(format).render(label, projection)
}

/// Project items onto `fields` and print them
pub fn print_list<T: Fields>(items: &[T], fields: &[&str], format: OutputFormat) -> Result<()> {
    print_list_as(T::LABEL, items, fields, format)
}

/// Like `print_list` with an explicit label
pub fn print_list_as<T: Fields>(
    label: &str,
    items: &[T],
    fields: &[&str],
    format: OutputFormat,
) -> Result<()> {
    let projection = project(items, fields);
    let out = render_projection(label, &projection, format)?;
    println!("{}", out.trim_end());
    Ok(())
}
