//! Instance command arguments

use clap::{Args, Subcommand};

use super::common::ListArgs;

/// Instance subcommands
#[derive(Subcommand, Debug)]
pub enum InstanceCommand {
    /// List instances
    #[command(visible_alias = "ls")]
    List(InstanceListArgs),
}

/// Arguments for 'instance list'
#[derive(Args, Debug, Clone, Default)]
pub struct InstanceListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Show instance ID
    #[arg(long)]
    pub show_id: bool,

    /// Show the host an instance runs on
    #[arg(long)]
    pub show_host: bool,

    /// Show network and VPC names
    #[arg(long)]
    pub show_network: bool,

    /// Show service offering
    #[arg(long)]
    pub show_service_offering: bool,

    /// Show template
    #[arg(long)]
    pub show_template: bool,

    /// Show instance version
    #[arg(long)]
    pub show_version: bool,
}
