//! cosmic-cli - Query and manage Cosmic resources across API endpoints
//!
//! Every command runs against all configured profiles (or the ones picked
//! with `--profile`) in parallel, merges the results and prints them as a
//! single list.
//!
//! # Features
//!
//! - List instances, VPCs, private gateways, static routes, ACLs and ACL rules
//! - Add, delete and flush VPC static routes
//! - Find the owner of an IP or MAC address
//! - Regex filters, sorting and opt-in columns
//! - Table, CSV, JSON and YAML output
//!
//! # Example
//!
//! ```bash
//! # List all instances, with network and VPC names
//! cosmic-cli instance list --show-network
//!
//! # Only running instances in eu- zones, from two profiles
//! cosmic-cli instance list -p alpha,beta -f state=Running -f zonename=^eu-
//!
//! # Static routes of a VPC
//! cosmic-cli vpc route list --vpc-name prod
//!
//! # Route two networks through a private gateway
//! cosmic-cli vpc route add 10.1.0.0/16,10.2.0.0/16 via 172.16.0.1 --vpc-name prod
//! ```

pub mod cli;
pub mod config;
pub mod cosmic;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod profiles;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use cosmic::{ClientSet, CosmicClient, CosmicResource, Selector};
pub use error::{redact, CosmicError, Result};
pub use pipeline::{FilterPredicate, ListOptions};
pub use profiles::{prune_duplicates, select_profiles, ProfileConfig, ProfileStore};
