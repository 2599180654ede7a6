//! Private gateway command handlers

use crate::cli::PrivateGatewayListArgs;
use crate::cosmic::ClientSet;
use crate::error::Result;
use crate::output::print_list;
use crate::ui::{create_spinner, finish_spinner};

use super::api::list_private_gateways;
use super::models::PrivateGateway;

/// Columns shown for `vpc private-gateway list`
pub(crate) fn private_gateway_list_fields(args: &PrivateGatewayListArgs) -> Vec<&'static str> {
    let mut fields = vec!["cidr", "ipaddress", "networkname", "vpccidr", "vpcname", "zonename"];
    if args.show_id {
        fields.extend(["id", "networkid", "vpcid"]);
    }
    fields
}

/// Run the vpc private-gateway list command
pub async fn run_private_gateway_list_command(
    clients: &ClientSet,
    args: &PrivateGatewayListArgs,
    batch: bool,
) -> Result<()> {
    let options = args.list.options("ipaddress")?;
    options.validate::<PrivateGateway>()?;

    let spinner = create_spinner("Fetching private gateways...", batch);
    let fetched = list_private_gateways(clients).await;
    finish_spinner(spinner);

    let gateways = options.apply(fetched?)?;
    print_list(&gateways, &private_gateway_list_fields(args), args.list.output)
}
