//! Filter, sort and projection pipeline shared by all list commands

pub mod fields;
pub mod filter;
pub mod project;
pub mod sort;

pub use fields::{normalize, Field, FieldValue, Fields};
pub use filter::{apply_filters, FilterPredicate};
pub use project::{project, Projection};
pub use sort::{sort_by_field, validate_sort_field};

use crate::error::Result;

/// Filtering and sorting requested for a list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filters: Vec<FilterPredicate>,
    pub sort_by: String,
    pub reverse: bool,
}

impl ListOptions {
    /// Parse raw `field=pattern` filters
    pub fn new(filters: &[String], sort_by: &str, reverse: bool) -> Result<Self> {
        let filters = filters
            .iter()
            .map(|f| FilterPredicate::parse(f))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            filters,
            sort_by: sort_by.to_string(),
            reverse,
        })
    }

    /// Add a filter on top of the user supplied ones
    pub fn with_filter(mut self, filter: FilterPredicate) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check the sort key before any API call is made
    pub fn validate<T: Fields>(&self) -> Result<()> {
        validate_sort_field::<T>(&self.sort_by)
    }

    /// Filter then sort
    pub fn apply<T: Fields>(&self, items: Vec<T>) -> Result<Vec<T>> {
        self.validate::<T>()?;
        let mut items = apply_filters(items, &self.filters);
        sort_by_field(&mut items, &self.sort_by, self.reverse)?;
        Ok(items)
    }
}
