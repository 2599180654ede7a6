//! VPC static routes

mod api;
mod commands;
mod models;

pub use api::{create_static_route, delete_static_route, list_static_routes};
pub use commands::{
    run_route_add_command, run_route_delete_command, run_route_flush_command,
    run_route_list_command,
};
pub use models::{StaticRoute, StaticRouteRecord};
