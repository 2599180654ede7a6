//! VPC, private gateway and static route command arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, VpcScopeArgs};

/// VPC subcommands
#[derive(Subcommand, Debug)]
pub enum VpcCommand {
    /// List VPCs
    #[command(visible_alias = "ls")]
    List(VpcListArgs),

    /// Private gateway subcommands
    #[command(subcommand)]
    PrivateGateway(PrivateGatewayCommand),

    /// Static route subcommands
    #[command(subcommand)]
    Route(RouteCommand),
}

/// Arguments for 'vpc list'
#[derive(Args, Debug, Clone, Default)]
pub struct VpcListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    #[command(flatten)]
    pub scope: VpcScopeArgs,

    /// Show VPC ID
    #[arg(long)]
    pub show_id: bool,

    /// Show source NAT IP address
    #[arg(long)]
    pub show_snat: bool,

    /// Show whether the VPC router is redundant
    #[arg(long)]
    pub show_redundant_status: bool,

    /// Show whether the VPC needs a restart
    #[arg(long)]
    pub show_restart_required: bool,
}

/// Private gateway subcommands
#[derive(Subcommand, Debug)]
pub enum PrivateGatewayCommand {
    /// List private gateways
    #[command(visible_alias = "ls")]
    List(PrivateGatewayListArgs),
}

/// Arguments for 'vpc private-gateway list'
#[derive(Args, Debug, Clone, Default)]
pub struct PrivateGatewayListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Show gateway, network and VPC IDs
    #[arg(long)]
    pub show_id: bool,
}

/// Static route subcommands
#[derive(Subcommand, Debug)]
pub enum RouteCommand {
    /// List static routes of a VPC
    #[command(visible_alias = "ls")]
    List(RouteListArgs),

    /// Add static routes to a VPC
    Add(RouteAddArgs),

    /// Delete static routes matching a CIDR or next hop
    #[command(visible_alias = "rm")]
    Delete(RouteDeleteArgs),

    /// Delete all static routes of a VPC
    Flush(RouteFlushArgs),
}

/// Arguments for 'vpc route list'
#[derive(Args, Debug, Clone, Default)]
pub struct RouteListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    #[command(flatten)]
    pub scope: VpcScopeArgs,

    /// Show route ID
    #[arg(long)]
    pub show_id: bool,
}

/// Arguments for 'vpc route add'
#[derive(Args, Debug, Clone, Default)]
pub struct RouteAddArgs {
    /// Routes to add: CIDR[,CIDR] via NEXTHOP
    #[arg(value_name = "ROUTE", num_args = 0..)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub scope: VpcScopeArgs,
}

/// Arguments for 'vpc route delete'
#[derive(Args, Debug, Clone, Default)]
pub struct RouteDeleteArgs {
    /// Routes to delete: cidr=REGEX[,REGEX] or nexthop=REGEX[,REGEX]
    #[arg(value_name = "MATCH", num_args = 0..)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub scope: VpcScopeArgs,
}

/// Arguments for 'vpc route flush'
#[derive(Args, Debug, Clone, Default)]
pub struct RouteFlushArgs {
    #[command(flatten)]
    pub scope: VpcScopeArgs,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
