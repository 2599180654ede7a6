//! Named field access for displayable entities

use std::fmt;

/// Value of a single named field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl FieldValue {
    pub fn text(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Accessor for one named field of `T`
pub struct Field<T> {
    /// Lowercase name without spaces
    pub name: &'static str,
    pub get: fn(&T) -> FieldValue,
}

/// Entities that expose a static table of named fields
pub trait Fields: Sized + 'static {
    /// Singular label used in result counts (e.g. "VPC")
    const LABEL: &'static str;

    /// Every field, `profile` included
    const FIELDS: &'static [Field<Self>];

    /// Fields accepted by --sort-by
    const SORT_FIELDS: &'static [&'static str];

    /// Look up a field accessor by (case and space insensitive) name
    fn lookup(name: &str) -> Option<&'static Field<Self>> {
        let key = normalize(name);
        Self::FIELDS.iter().find(|f| f.name == key)
    }

    /// Read a field by name
    fn field(&self, name: &str) -> Option<FieldValue> {
        Self::lookup(name).map(|f| (f.get)(self))
    }
}

/// Canonical form of a user supplied field name
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
