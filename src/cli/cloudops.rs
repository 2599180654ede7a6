//! Cloud operations command arguments

use clap::{Args, Subcommand};

use super::common::ListArgs;

/// Cloud operations subcommands
#[derive(Subcommand, Debug)]
pub enum CloudOpsCommand {
    /// Lookup subcommands
    #[command(subcommand)]
    List(CloudOpsListCommand),
}

/// Address lookups
#[derive(Subcommand, Debug)]
pub enum CloudOpsListCommand {
    /// Show who owns an IP address
    Ip(IpLookupArgs),

    /// Show who owns a MAC address
    Mac(MacLookupArgs),
}

/// Arguments for 'cloudops list ip'
#[derive(Args, Debug, Clone, Default)]
pub struct IpLookupArgs {
    /// IP address to look up
    #[arg(value_name = "IPADDRESS")]
    pub ip_address: String,

    #[command(flatten)]
    pub list: ListArgs,

    /// Show MAC address
    #[arg(long)]
    pub show_mac_address: bool,
}

/// Arguments for 'cloudops list mac'
#[derive(Args, Debug, Clone, Default)]
pub struct MacLookupArgs {
    /// MAC address to look up
    #[arg(value_name = "MACADDRESS")]
    pub mac_address: String,

    #[command(flatten)]
    pub list: ListArgs,
}
