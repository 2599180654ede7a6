//! Cloud operations lookups (who owns an IP or MAC address)

mod api;
mod commands;
mod models;

pub use api::{lookup_address, AddressKind};
pub use commands::{run_ip_lookup_command, run_mac_lookup_command};
pub use models::{AddressOwner, AddressRecord};
