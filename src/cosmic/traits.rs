//! Common traits for Cosmic resources

use crate::error::{CosmicError, Result};

/// Common trait for resources that can be looked up across profiles
pub trait CosmicResource {
    /// Human-readable kind used in lookup errors (e.g. "VPC")
    const KIND: &'static str;

    /// CLI option that selects this kind by ID (e.g. "vpc-id")
    const ID_OPTION: &'static str;

    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Profile the resource was fetched from
    fn profile(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// User supplied reference to a single resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Name(String),
}

impl Selector {
    /// Resolve against an aggregated collection
    pub fn find<'a, T: CosmicResource>(&self, items: &'a [T]) -> Result<&'a T> {
        match self {
            Selector::Id(id) => find_by_id(items, id),
            Selector::Name(name) => find_by_name(items, name),
        }
    }
}

/// Find exactly one resource with the given ID
pub fn find_by_id<'a, T: CosmicResource>(items: &'a [T], id: &str) -> Result<&'a T> {
    let found: Vec<&T> = items.iter().filter(|r| r.id() == id).collect();
    match found.as_slice() {
        [] => Err(CosmicError::NotFound(format!(
            "No match found for {} with id {}",
            T::KIND,
            id
        ))),
        [single] => Ok(*single),
        many => Err(CosmicError::Ambiguous(format!(
            "More than one match found for {} with id {} (profiles: {}), use the --profile option to select one",
            T::KIND,
            id,
            many.iter().map(|r| r.profile()).collect::<Vec<_>>().join(", ")
        ))),
    }
}

/// Find exactly one resource with the given name
pub fn find_by_name<'a, T: CosmicResource>(items: &'a [T], name: &str) -> Result<&'a T> {
    let found: Vec<&T> = items.iter().filter(|r| r.name() == name).collect();
    match found.as_slice() {
        [] => Err(CosmicError::NotFound(format!(
            "No match found for {} with name {}",
            T::KIND,
            name
        ))),
        [single] => Ok(*single),
        many => Err(CosmicError::Ambiguous(format!(
            "More than one match found for {} with name {} ({}), use the --{} option to specify the {}",
            T::KIND,
            name,
            many.iter()
                .map(|r| format!("{} in profile {}", r.id(), r.profile()))
                .collect::<Vec<_>>()
                .join(", "),
            T::ID_OPTION,
            T::KIND
        ))),
    }
}
