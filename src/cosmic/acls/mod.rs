//! Network ACLs and their rules

mod api;
mod commands;
mod models;

pub use api::{list_acl_rules, list_acls, resolve_acl};
pub use commands::{run_acl_list_command, run_acl_rule_list_command};
pub use models::{Acl, AclListRecord, AclRule, AclRuleRecord, AclTarget};
