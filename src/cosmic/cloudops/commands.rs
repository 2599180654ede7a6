//! Cloud operations command handlers

use std::net::IpAddr;

use crate::cli::{IpLookupArgs, ListArgs, MacLookupArgs};
use crate::cosmic::ClientSet;
use crate::error::{CosmicError, Result};
use crate::output::print_list_as;
use crate::pipeline::FilterPredicate;
use crate::ui::{create_spinner, finish_spinner};

use super::api::{lookup_address, AddressKind};
use super::models::AddressOwner;

/// Canonical text form of an IP address argument
pub(crate) fn parse_ip(input: &str) -> Result<String> {
    input
        .parse::<IpAddr>()
        .map(|ip| ip.to_string())
        .map_err(|_| CosmicError::Validation(format!("{} is not a valid IP address", input)))
}

/// Lowercase colon separated form of a MAC address argument
///
/// Accepts six hex pairs separated by `:` or `-`.
pub(crate) fn parse_mac(input: &str) -> Result<String> {
    let invalid = || CosmicError::Validation(format!("{} is not a valid MAC address", input));

    let separator = if input.contains('-') { '-' } else { ':' };
    let octets: Vec<&str> = input.split(separator).collect();
    if octets.len() != 6
        || octets
            .iter()
            .any(|o| o.len() != 2 || !o.chars().all(|c| c.is_ascii_hexdigit()))
    {
        return Err(invalid());
    }

    Ok(octets.join(":").to_lowercase())
}

/// Columns for an address lookup
///
/// Network and instance names only get a column when some row has one.
pub(crate) fn address_fields(
    kind: AddressKind,
    owners: &[AddressOwner],
    show_mac_address: bool,
) -> Vec<&'static str> {
    let mut fields = match kind {
        AddressKind::Ip => vec!["ipaddress", "netmask", "vpcname", "zonename"],
        AddressKind::Mac => vec!["macaddress", "ipaddress", "netmask", "vpcname", "zonename"],
    };
    if show_mac_address && kind == AddressKind::Ip {
        fields.push("macaddress");
    }
    if owners.iter().any(|o| !o.base.networkname.is_empty()) {
        fields.push("networkname");
    }
    if owners.iter().any(|o| !o.base.virtualmachinename.is_empty()) {
        fields.push("virtualmachinename");
    }
    fields
}

async fn run_lookup(
    clients: &ClientSet,
    kind: AddressKind,
    address: &str,
    list: &ListArgs,
    show_mac_address: bool,
    batch: bool,
) -> Result<()> {
    let options = list
        .options(kind.field())?
        .with_filter(FilterPredicate::exact(kind.field(), address)?);
    options.validate::<AddressOwner>()?;

    let spinner = create_spinner("Looking up address...", batch);
    let fetched = lookup_address(clients, kind, address).await;
    finish_spinner(spinner);

    let owners = options.apply(fetched?)?;
    let label = match kind {
        AddressKind::Ip => "IP address",
        AddressKind::Mac => "MAC address",
    };
    let fields = address_fields(kind, &owners, show_mac_address);
    print_list_as(label, &owners, &fields, list.output)
}

/// Run the cloudops list ip command
pub async fn run_ip_lookup_command(clients: &ClientSet, args: &IpLookupArgs, batch: bool) -> Result<()> {
    let ip = parse_ip(&args.ip_address)?;
    run_lookup(clients, AddressKind::Ip, &ip, &args.list, args.show_mac_address, batch).await
}

/// Run the cloudops list mac command
pub async fn run_mac_lookup_command(clients: &ClientSet, args: &MacLookupArgs, batch: bool) -> Result<()> {
    let mac = parse_mac(&args.mac_address)?;
    run_lookup(clients, AddressKind::Mac, &mac, &args.list, false, batch).await
}
