//! VPCs

mod api;
mod commands;
mod models;

pub use api::{list_vpcs, resolve_vpc};
pub use commands::run_vpc_list_command;
pub use models::{Vpc, VpcRecord};
