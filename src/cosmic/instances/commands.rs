//! Instance command handlers

use crate::cli::InstanceListArgs;
use crate::cosmic::correlate::attach_networks;
use crate::cosmic::networks::list_networks;
use crate::cosmic::vpcs::list_vpcs;
use crate::cosmic::ClientSet;
use crate::error::Result;
use crate::output::print_list;
use crate::ui::{create_spinner, finish_spinner};

use super::api::list_instances;
use super::models::Instance;

/// Columns shown for `instance list`
pub(crate) fn instance_list_fields(args: &InstanceListArgs) -> Vec<&'static str> {
    let mut fields = vec!["name", "instancename", "state", "ipaddress", "zonename"];
    if args.show_id {
        fields.push("id");
    }
    if args.show_host {
        fields.push("hostname");
    }
    if args.show_network {
        fields.push("networkname");
        fields.push("vpcname");
    }
    if args.show_service_offering {
        fields.push("serviceofferingname");
    }
    if args.show_template {
        fields.push("templatename");
    }
    if args.show_version {
        fields.push("version");
    }
    fields
}

/// Run the instance list command
pub async fn run_instance_list_command(
    clients: &ClientSet,
    args: &InstanceListArgs,
    batch: bool,
) -> Result<()> {
    let options = args.list.options("name")?;
    options.validate::<Instance>()?;

    let spinner = create_spinner("Fetching instances...", batch);
    let fetched = fetch_instances(clients, args.show_network).await;
    finish_spinner(spinner);

    let instances = options.apply(fetched?)?;
    print_list(&instances, &instance_list_fields(args), args.list.output)
}

async fn fetch_instances(clients: &ClientSet, with_network: bool) -> Result<Vec<Instance>> {
    if !with_network {
        return list_instances(clients).await;
    }

    let (mut instances, networks, vpcs) = tokio::try_join!(
        list_instances(clients),
        list_networks(clients),
        list_vpcs(clients)
    )?;
    attach_networks(&mut instances, &networks, &vpcs);
    Ok(instances)
}
