//! Guest networks, used to correlate instances, ACLs and address lookups

mod api;
mod models;

pub use api::list_networks;
pub use models::{Network, NetworkRecord};
