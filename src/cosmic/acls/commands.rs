//! ACL command handlers

use crate::cli::{AclListArgs, AclRuleListArgs};
use crate::cosmic::{ClientSet, Selector};
use crate::error::Result;
use crate::output::print_list;
use crate::pipeline::{FilterPredicate, ListOptions};
use crate::ui::{create_spinner, finish_spinner};

use super::api::{list_acl_rules, list_acls, resolve_acl};
use super::models::{Acl, AclRule, AclTarget};

/// Columns shown for `acl list`
pub(crate) fn acl_list_fields(args: &AclListArgs) -> Vec<&'static str> {
    let mut fields = vec!["id", "name", "vpcname", "zonename"];
    if args.show_description {
        fields.push("description");
    }
    if args.scope.vpc_id.is_some() {
        fields.push("vpcid");
    }
    fields
}

/// Narrow the user's filters to the selected VPC
pub(crate) fn scoped_options(options: ListOptions, scope: Option<&Selector>) -> Result<ListOptions> {
    Ok(match scope {
        Some(Selector::Id(id)) => options.with_filter(FilterPredicate::exact("vpcid", id)?),
        Some(Selector::Name(name)) => options.with_filter(FilterPredicate::exact("vpcname", name)?),
        None => options,
    })
}

/// Run the acl list command
pub async fn run_acl_list_command(clients: &ClientSet, args: &AclListArgs, batch: bool) -> Result<()> {
    let scope = args.scope.selector()?;
    let options = scoped_options(args.list.options("vpcname")?, scope.as_ref())?;
    options.validate::<Acl>()?;

    let spinner = create_spinner("Fetching ACLs...", batch);
    let fetched = list_acls(clients).await;
    finish_spinner(spinner);

    let acls = options.apply(fetched?)?;
    print_list(&acls, &acl_list_fields(args), args.list.output)
}

/// Columns shown for `acl rule list`
pub(crate) fn acl_rule_list_fields(args: &AclRuleListArgs) -> Vec<&'static str> {
    let mut fields = vec![
        "action",
        "cidrlist",
        "endport",
        "icmpcode",
        "icmptype",
        "protocol",
        "startport",
        "traffictype",
    ];
    if args.show_acl_id {
        fields.push("aclid");
    }
    if args.show_acl_name {
        fields.push("aclname");
    }
    if args.show_id {
        fields.push("id");
    }
    if args.show_rule_number {
        fields.push("number");
    }
    fields
}

/// Run the acl rule list command
pub async fn run_acl_rule_list_command(
    clients: &ClientSet,
    args: &AclRuleListArgs,
    batch: bool,
) -> Result<()> {
    let target = args.target()?;
    let options = args.list.options("number")?;
    options.validate::<AclRule>()?;

    let spinner = create_spinner("Fetching ACL rules...", batch);
    let fetched = fetch_rules(clients, &target).await;
    finish_spinner(spinner);

    let rules = options.apply(fetched?)?;
    print_list(&rules, &acl_rule_list_fields(args), args.list.output)
}

async fn fetch_rules(clients: &ClientSet, target: &AclTarget) -> Result<Vec<AclRule>> {
    let acl = resolve_acl(clients, target).await?;
    list_acl_rules(clients, &acl).await
}
