//! Cosmic API access and per-resource operations
//!
//! `client` signs and sends single requests, `fanout` runs one operation
//! against every selected profile, and `correlate` joins the merged results.
//! Each resource module carries its API calls, models and command handlers.

mod client;
pub mod correlate;
mod fanout;
#[cfg(test)]
pub(crate) mod testing;
mod traits;

pub mod acls;
pub mod cloudops;
pub mod instances;
pub mod networks;
pub mod private_gateways;
pub mod public_ips;
pub mod routes;
pub mod vpcs;
pub mod zones;

pub use acls::{run_acl_list_command, run_acl_rule_list_command, AclTarget};
pub use client::CosmicClient;
pub use cloudops::{run_ip_lookup_command, run_mac_lookup_command};
pub use fanout::ClientSet;
pub use instances::run_instance_list_command;
pub use private_gateways::run_private_gateway_list_command;
pub use routes::{
    run_route_add_command, run_route_delete_command, run_route_flush_command,
    run_route_list_command,
};
pub use traits::{find_by_id, find_by_name, CosmicResource, Selector};
pub use vpcs::run_vpc_list_command;
