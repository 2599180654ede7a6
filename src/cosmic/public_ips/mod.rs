//! Public IP addresses, used to find VPC source NAT addresses

mod api;
mod models;

pub use api::list_public_ips;
pub use models::PublicIpAddress;
