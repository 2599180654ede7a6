//! Zone lookups

mod api;
mod models;

pub use models::Zone;
