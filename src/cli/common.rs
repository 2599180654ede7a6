//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::cosmic::Selector;
use crate::error::{CosmicError, Result};
use crate::pipeline::ListOptions;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// ASCII table (default)
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Filtering, sorting and output flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter results, in the form of "field=regex" (repeatable)
    #[arg(short = 'f', long = "filter", value_name = "FIELD=REGEX")]
    pub filters: Vec<String>,

    /// Sort results by field
    #[arg(short = 's', long)]
    pub sort_by: Option<String>,

    /// Reverse sort order (descending)
    #[arg(long, default_value_t = false)]
    pub reverse_sort: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl ListArgs {
    /// Parse filters and pick the sort key, falling back to the command default
    pub fn options(&self, default_sort: &str) -> Result<ListOptions> {
        ListOptions::new(
            &self.filters,
            self.sort_by.as_deref().unwrap_or(default_sort),
            self.reverse_sort,
        )
    }
}

/// `--vpc-id` / `--vpc-name` scope flags
#[derive(Args, Debug, Clone, Default)]
pub struct VpcScopeArgs {
    /// VPC ID
    #[arg(long)]
    pub vpc_id: Option<String>,

    /// VPC name
    #[arg(long)]
    pub vpc_name: Option<String>,
}

impl VpcScopeArgs {
    /// Optional scope; giving both flags is an error
    pub fn selector(&self) -> Result<Option<Selector>> {
        pick_one(&[
            ("vpc-id", self.vpc_id.as_deref(), Selector::Id as fn(String) -> Selector),
            ("vpc-name", self.vpc_name.as_deref(), Selector::Name),
        ])
    }

    /// Mandatory scope
    pub fn required(&self) -> Result<Selector> {
        self.selector()?.ok_or_else(|| {
            CosmicError::Validation("One of --vpc-id or --vpc-name is required".to_string())
        })
    }
}

/// Return the single flag that was given, if any
///
/// More than one given flag is a validation error naming the first pair.
pub fn pick_one<T>(flags: &[(&str, Option<&str>, fn(String) -> T)]) -> Result<Option<T>> {
    let given: Vec<_> = flags
        .iter()
        .filter_map(|(name, value, make)| value.map(|v| (*name, v, make)))
        .collect();

    match given.as_slice() {
        [] => Ok(None),
        [(_, value, make)] => Ok(Some(make(value.to_string()))),
        [(first, ..), (second, ..), ..] => Err(CosmicError::Validation(format!(
            "Cannot specify --{} and --{} together",
            first, second
        ))),
    }
}
