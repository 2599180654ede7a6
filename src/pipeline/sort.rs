//! Stable sorting by a named field

use super::fields::{normalize, Fields};
use crate::error::{CosmicError, Result};

/// Sort items by `field`, which must be in the entity's sort allow-list
pub fn sort_by_field<T: Fields>(items: &mut [T], field: &str, reverse: bool) -> Result<()> {
    let key = normalize(field);
    let accessor = T::SORT_FIELDS
        .iter()
        .find(|f| **f == key)
        .and_then(|f| T::lookup(f))
        .ok_or_else(|| invalid_sort_option(T::SORT_FIELDS))?;

    items.sort_by(|a, b| {
        let ord = (accessor.get)(a).cmp(&(accessor.get)(b));
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
    Ok(())
}

/// Check a sort key without sorting anything
pub fn validate_sort_field<T: Fields>(field: &str) -> Result<()> {
    let key = normalize(field);
    if T::SORT_FIELDS.contains(&key.as_str()) {
        Ok(())
    } else {
        Err(invalid_sort_option(T::SORT_FIELDS))
    }
}

fn invalid_sort_option(allowed: &[&str]) -> CosmicError {
    let quoted: Vec<String> = allowed.iter().map(|f| format!("\"{}\"", f)).collect();
    let options = match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    };
    CosmicError::Validation(format!(
        "Invalid sort option provided, provide either {}.",
        options
    ))
}
