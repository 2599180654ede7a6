//! CLI argument parsing

mod acl;
mod cloudops;
mod common;
mod instance;
mod vpc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{defaults, profiles};

pub use acl::{AclCommand, AclListArgs, AclRuleCommand, AclRuleListArgs};
pub use cloudops::{CloudOpsCommand, CloudOpsListCommand, IpLookupArgs, MacLookupArgs};
pub use common::{pick_one, ListArgs, OutputFormat, VpcScopeArgs};
pub use instance::{InstanceCommand, InstanceListArgs};
pub use vpc::{
    PrivateGatewayCommand, PrivateGatewayListArgs, RouteAddArgs, RouteCommand, RouteDeleteArgs,
    RouteFlushArgs, RouteListArgs, VpcCommand, VpcListArgs,
};

/// Cosmic multi-profile CLI
#[derive(Parser, Debug)]
#[command(name = "cosmic-cli")]
#[command(version)]
#[command(
    about = "Query and manage Cosmic resources across multiple API endpoints",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Profile(s) to use, comma separated (default: all configured profiles)
    #[arg(short = 'p', long = "profile", global = true, value_delimiter = ',')]
    pub profiles: Vec<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner and no interactive prompts
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Path to the profiles file
    #[arg(long, global = true, env = profiles::ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Give up when not all profiles answered within this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Instance subcommands
    #[command(subcommand)]
    Instance(InstanceCommand),

    /// VPC subcommands
    #[command(subcommand)]
    Vpc(VpcCommand),

    /// ACL subcommands
    #[command(subcommand)]
    Acl(AclCommand),

    /// Cloud operations subcommands
    #[command(subcommand)]
    Cloudops(CloudOpsCommand),

    /// Print the command reference as Markdown
    Docs,
}
