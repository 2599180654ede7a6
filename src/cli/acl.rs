//! ACL command arguments

use clap::{Args, Subcommand};

use super::common::{pick_one, ListArgs, VpcScopeArgs};
use crate::cosmic::AclTarget;
use crate::error::{CosmicError, Result};

/// ACL subcommands
#[derive(Subcommand, Debug)]
pub enum AclCommand {
    /// List ACLs
    #[command(visible_alias = "ls")]
    List(AclListArgs),

    /// ACL rule subcommands
    #[command(subcommand)]
    Rule(AclRuleCommand),
}

/// Arguments for 'acl list'
#[derive(Args, Debug, Clone, Default)]
pub struct AclListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    #[command(flatten)]
    pub scope: VpcScopeArgs,

    /// Show ACL description
    #[arg(long)]
    pub show_description: bool,
}

/// ACL rule subcommands
#[derive(Subcommand, Debug)]
pub enum AclRuleCommand {
    /// List the rules of one ACL
    #[command(visible_alias = "ls")]
    List(AclRuleListArgs),
}

/// Arguments for 'acl rule list'
#[derive(Args, Debug, Clone, Default)]
pub struct AclRuleListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// ACL ID
    #[arg(long)]
    pub acl_id: Option<String>,

    /// ACL name
    #[arg(long)]
    pub acl_name: Option<String>,

    /// Instance ID; uses the ACL of its primary NIC network
    #[arg(long)]
    pub instance_id: Option<String>,

    /// Instance name; uses the ACL of its primary NIC network
    #[arg(long)]
    pub instance_name: Option<String>,

    /// Network ID
    #[arg(long)]
    pub network_id: Option<String>,

    /// Network name
    #[arg(long)]
    pub network_name: Option<String>,

    /// Show ACL ID
    #[arg(long)]
    pub show_acl_id: bool,

    /// Show ACL name
    #[arg(long)]
    pub show_acl_name: bool,

    /// Show rule ID
    #[arg(long)]
    pub show_id: bool,

    /// Show rule number
    #[arg(long)]
    pub show_rule_number: bool,
}

impl AclRuleListArgs {
    /// The one selector that was given
    pub fn target(&self) -> Result<AclTarget> {
        pick_one(&[
            ("acl-id", self.acl_id.as_deref(), AclTarget::AclId as fn(String) -> AclTarget),
            ("acl-name", self.acl_name.as_deref(), AclTarget::AclName),
            ("instance-id", self.instance_id.as_deref(), AclTarget::InstanceId),
            ("instance-name", self.instance_name.as_deref(), AclTarget::InstanceName),
            ("network-id", self.network_id.as_deref(), AclTarget::NetworkId),
            ("network-name", self.network_name.as_deref(), AclTarget::NetworkName),
        ])?
        .ok_or_else(|| {
            CosmicError::Validation(
                "One of --acl-id, --acl-name, --instance-id, --instance-name, --network-id or --network-name is required"
                    .to_string(),
            )
        })
    }
}
