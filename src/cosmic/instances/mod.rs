//! Virtual machine instances

mod api;
mod commands;
mod models;

pub use api::list_instances;
pub use commands::run_instance_list_command;
pub use models::{Instance, Nic, VirtualMachine};
