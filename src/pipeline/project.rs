//! Column projection of entities into printable rows

use super::fields::{normalize, Fields};

/// Headers and string cells ready for rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project items onto the named fields
///
/// Columns are ordered alphabetically. Missing fields render as empty cells.
pub fn project<T: Fields>(items: &[T], fields: &[&str]) -> Projection {
    let mut headers: Vec<String> = fields.iter().map(|f| normalize(f)).collect();
    headers.sort();
    headers.dedup();

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|h| item.field(h).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect();

    Projection { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::super::fields::testing::*;
    use super::*;

    #[test]
    fn test_columns_sorted_alphabetically() {
        let items = vec![row("web", "zone-a", 2)];
        let p = project(&items, &["zonename", "name", "count"]);
        assert_eq!(p.headers, vec!["count", "name", "zonename"]);
        assert_eq!(p.rows, vec![vec!["2", "web", "zone-a"]]);
    }

    #[test]
    fn test_missing_field_is_empty() {
        let items = vec![row("web", "zone-a", 2)];
        let p = project(&items, &["name", "nothere"]);
        assert_eq!(p.rows, vec![vec!["web", ""]]);
    }

    #[test]
    fn test_duplicate_fields_collapse() {
        let items = vec![row("web", "zone-a", 2)];
        let p = project(&items, &["Name", "name"]);
        assert_eq!(p.headers, vec!["name"]);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Row> = vec![];
        let p = project(&items, &["name"]);
        assert!(p.is_empty());
        assert_eq!(p.headers, vec!["name"]);
    }
}
