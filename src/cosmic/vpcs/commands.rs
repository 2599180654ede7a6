//! VPC command handlers

use log::debug;

use crate::cli::VpcListArgs;
use crate::cosmic::correlate::attach_source_nat;
use crate::cosmic::public_ips::list_public_ips;
use crate::cosmic::{ClientSet, Selector};
use crate::error::Result;
use crate::output::print_list;
use crate::ui::{create_spinner, finish_spinner};

use super::api::{list_vpcs, resolve_vpc};
use super::models::Vpc;

/// Columns shown for `vpc list`
pub(crate) fn vpc_list_fields(args: &VpcListArgs) -> Vec<&'static str> {
    let mut fields = vec!["name", "cidr", "vpcofferingname", "zonename"];
    if args.show_id {
        fields.push("id");
    }
    if args.show_snat {
        fields.push("sourcenatip");
    }
    if args.show_redundant_status {
        fields.push("redundantvpcrouter");
    }
    if args.show_restart_required {
        fields.push("restartrequired");
    }
    fields
}

/// Run the vpc list command
pub async fn run_vpc_list_command(clients: &ClientSet, args: &VpcListArgs, batch: bool) -> Result<()> {
    let options = args.list.options("name")?;
    options.validate::<Vpc>()?;
    let scope = args.scope.selector()?;

    let spinner = create_spinner("Fetching VPCs...", batch);
    let fetched = fetch_vpcs(clients, scope.as_ref(), args.show_snat).await;
    finish_spinner(spinner);
    let vpcs = fetched?;

    debug!("Fetched {} VPC(s)", vpcs.len());
    let vpcs = options.apply(vpcs)?;
    print_list(&vpcs, &vpc_list_fields(args), args.list.output)
}

async fn fetch_vpcs(
    clients: &ClientSet,
    scope: Option<&Selector>,
    show_snat: bool,
) -> Result<Vec<Vpc>> {
    let mut vpcs = match scope {
        Some(selector) => vec![resolve_vpc(clients, selector).await?],
        None => list_vpcs(clients).await?,
    };

    if show_snat {
        let public_ips = list_public_ips(clients).await?;
        attach_source_nat(&mut vpcs, &public_ips);
    }

    Ok(vpcs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::VpcScopeArgs;
    use crate::cosmic::testing::{client_set, mount_list};
    use wiremock::MockServer;

    #[test]
    fn test_default_fields() {
        let fields = vpc_list_fields(&VpcListArgs::default());
        assert_eq!(fields, vec!["name", "cidr", "vpcofferingname", "zonename"]);
    }

    #[test]
    fn test_show_flags_add_fields() {
        let args = VpcListArgs {
            show_id: true,
            show_snat: true,
            show_redundant_status: true,
            show_restart_required: true,
            ..Default::default()
        };
        let fields = vpc_list_fields(&args);
        assert!(fields.contains(&"id"));
        assert!(fields.contains(&"sourcenatip"));
        assert!(fields.contains(&"redundantvpcrouter"));
        assert!(fields.contains(&"restartrequired"));
    }

    #[tokio::test]
    async fn test_fetch_vpcs_with_source_nat() {
        let alpha = MockServer::start().await;
        mount_list(
            &alpha,
            "listVPCs",
            "vpc",
            serde_json::json!([{"id": "v-1", "name": "prod"}]),
        )
        .await;
        mount_list(
            &alpha,
            "listPublicIpAddresses",
            "publicipaddress",
            serde_json::json!([{"id": "ip-1", "ipaddress": "1.2.3.4", "issourcenat": true, "vpcid": "v-1"}]),
        )
        .await;

        let clients = client_set(&[("alpha", &alpha)]);
        let vpcs = fetch_vpcs(&clients, None, true).await.unwrap();
        assert_eq!(vpcs[0].source_nat_ip, "1.2.3.4");
    }

    #[tokio::test]
    async fn test_run_rejects_both_scope_flags() {
        let clients = ClientSet::new();
        let args = VpcListArgs {
            scope: VpcScopeArgs {
                vpc_id: Some("v-1".to_string()),
                vpc_name: Some("prod".to_string()),
            },
            ..Default::default()
        };
        let err = run_vpc_list_command(&clients, &args, true).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot specify --vpc-id and --vpc-name together");
    }

    #[tokio::test]
    async fn test_run_rejects_bad_sort_before_fetching() {
        let clients = ClientSet::new();
        let mut args = VpcListArgs::default();
        args.list.sort_by = Some("state".to_string());
        let err = run_vpc_list_command(&clients, &args, true).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sort option provided, provide either \"cidr\", \"name\", \"vpcofferingname\" or \"zonename\"."
        );
    }
}
