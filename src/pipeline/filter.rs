//! `field=pattern` filters applied to entity lists

use log::warn;
use regex::{Regex, RegexBuilder};

use super::fields::{normalize, Fields};
use crate::error::{CosmicError, Result};

/// A parsed `field=pattern` filter
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    field: String,
    pattern: Regex,
}

impl FilterPredicate {
    /// Parse a filter, splitting at the first `=`
    ///
    /// The pattern is a case-insensitive regular expression.
    pub fn parse(input: &str) -> Result<Self> {
        let (field, pattern) = input.split_once('=').ok_or_else(|| {
            CosmicError::Validation(
                "Invalid filter string passed, filters should be in the form of \"field=string\"."
                    .to_string(),
            )
        })?;

        let field = normalize(field.trim());
        if field.is_empty() {
            return Err(CosmicError::Validation(
                "Invalid filter string passed, filters should be in the form of \"field=string\"."
                    .to_string(),
            ));
        }

        let pattern = RegexBuilder::new(pattern.trim())
            .case_insensitive(true)
            .build()?;

        Ok(Self { field, pattern })
    }

    /// Filter matching a literal value exactly
    pub fn exact(field: &str, value: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!("^{}$", regex::escape(value)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            field: normalize(field),
            pattern,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Unknown fields never match
    pub fn matches<T: Fields>(&self, item: &T) -> bool {
        item.field(&self.field)
            .map(|v| self.pattern.is_match(&v.to_string()))
            .unwrap_or(false)
    }
}

/// Keep only the items matching every filter
pub fn apply_filters<T: Fields>(mut items: Vec<T>, filters: &[FilterPredicate]) -> Vec<T> {
    for filter in filters {
        if T::lookup(&filter.field).is_none() {
            warn!("Filter field '{}' does not exist, nothing will match", filter.field);
        }
        items.retain(|item| filter.matches(item));
    }
    items
}
