//! Profile management module
//!
//! Profiles bundle the connection parameters (API URL, keys, timeout, TLS
//! policy) of one Cosmic API endpoint. Every command runs against the set of
//! active profiles in parallel.

mod models;
mod resolve;
mod store;

pub use models::{Profile, ProfileConfig};
pub use resolve::{prune_duplicates, select_profiles};
pub use store::ProfileStore;
