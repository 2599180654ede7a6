//! VPC private gateways

mod api;
mod commands;
mod models;

pub use api::list_private_gateways;
pub use commands::run_private_gateway_list_command;
pub use models::{PrivateGateway, PrivateGatewayRecord};
