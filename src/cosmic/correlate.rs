//! In-memory joins between entity collections
//!
//! Every join indexes the right-hand side by ID once. When an ID occurs more
//! than once (the same resource seen through two profiles) the first entry
//! wins.

use std::collections::HashMap;

use log::warn;

use crate::config::defaults;
use crate::cosmic::acls::Acl;
use crate::cosmic::cloudops::AddressOwner;
use crate::cosmic::instances::Instance;
use crate::cosmic::networks::{Network, NetworkRecord};
use crate::cosmic::private_gateways::PrivateGateway;
use crate::cosmic::public_ips::PublicIpAddress;
use crate::cosmic::routes::StaticRoute;
use crate::cosmic::vpcs::{Vpc, VpcRecord};

fn index_by<'a, T>(items: &'a [T], key: impl Fn(&'a T) -> &'a str) -> HashMap<&'a str, &'a T> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(key(item)).or_insert(item);
    }
    index
}

/// Fill `network_name` and `vpc_name` from the primary NIC's network
pub fn attach_networks(instances: &mut [Instance], networks: &[Network], vpcs: &[Vpc]) {
    let networks = index_by(networks, |n| n.base.id.as_str());
    let vpcs = index_by(vpcs, |v| v.base.id.as_str());

    for instance in instances.iter_mut() {
        let Some(network) = instance
            .primary_nic()
            .and_then(|nic| networks.get(nic.networkid.as_str()))
        else {
            continue;
        };
        let network_name = network.base.name.clone();
        let vpc_name = vpcs
            .get(network.base.vpcid.as_str())
            .map(|v| v.base.name.clone())
            .unwrap_or_default();

        instance.network_name = network_name;
        instance.vpc_name = vpc_name;
    }
}

/// Fill `source_nat_ip` from the source NAT public IP of each VPC
pub fn attach_source_nat(vpcs: &mut [Vpc], public_ips: &[PublicIpAddress]) {
    for ip in public_ips.iter().filter(|ip| ip.issourcenat) {
        for vpc in vpcs.iter_mut().filter(|v| v.base.id == ip.vpcid) {
            if !vpc.source_nat_ip.is_empty() && vpc.source_nat_ip != ip.ipaddress {
                warn!(
                    "VPC {} ({}) has more than one source NAT IP: {} and {}",
                    vpc.base.name, vpc.base.id, vpc.source_nat_ip, ip.ipaddress
                );
            }
            vpc.source_nat_ip = ip.ipaddress.clone();
        }
    }
}

/// Fill `vpc_name` and `vpc_cidr` of each private gateway
pub fn attach_gateway_vpcs(gateways: &mut [PrivateGateway], vpcs: &[Vpc]) {
    let vpcs = index_by(vpcs, |v| v.base.id.as_str());

    for gateway in gateways.iter_mut() {
        if let Some(vpc) = vpcs.get(gateway.base.vpcid.as_str()) {
            gateway.vpc_name = vpc.base.name.clone();
            gateway.vpc_cidr = vpc.base.cidr.clone();
        }
    }
}

/// Label each route with the VPCs owning a private gateway at its next hop
///
/// Several matches are sorted and joined with ", "; no match leaves the
/// label empty.
pub fn label_routes(routes: &mut [StaticRoute], gateways: &[PrivateGateway]) {
    for route in routes.iter_mut() {
        let mut names: Vec<&str> = gateways
            .iter()
            .filter(|g| g.base.ipaddress == route.base.nexthop)
            .map(|g| g.vpc_name.as_str())
            .collect();
        names.sort_unstable();
        route.vpc_name = names.join(", ");
    }
}

/// Fill `vpc_name` of ACLs fetched from one profile
pub fn attach_acl_vpcs(acls: &mut [Acl], vpcs: &[VpcRecord]) {
    let vpcs = index_by(vpcs, |v| v.id.as_str());

    for acl in acls.iter_mut() {
        acl.vpc_name = vpcs
            .get(acl.base.vpcid.as_str())
            .map(|v| v.name.clone())
            .unwrap_or_default();
    }
}

/// Resolve network and VPC names of address owners fetched from one profile
///
/// For public addresses the API reports the VPC name as network name. In
/// that case the network name is cleared and only the VPC name kept.
pub fn attach_address_networks(
    owners: &mut [AddressOwner],
    networks: &[NetworkRecord],
    vpcs: &[VpcRecord],
) {
    let networks = index_by(networks, |n| n.id.as_str());
    let vpcs = index_by(vpcs, |v| v.id.as_str());

    for owner in owners.iter_mut() {
        let mut vpc_id = "";
        if let Some(network) = networks.get(owner.base.networkuuid.as_str()) {
            owner.base.networkname = network.name.clone();
            vpc_id = network.vpcid.as_str();
        }
        owner.vpc_name = vpcs
            .get(vpc_id)
            .map(|v| v.name.clone())
            .unwrap_or_default();

        if owner.base.networkname == owner.base.vpcname {
            owner.base.networkname.clear();
            owner.vpc_name = owner.base.vpcname.clone();
        }

        if owner.base.netmask.is_empty() {
            owner.base.netmask = defaults::HOST_NETMASK.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmic::acls::AclListRecord;
    use crate::cosmic::cloudops::AddressRecord;
    use crate::cosmic::instances::{Nic, VirtualMachine};
    use crate::cosmic::private_gateways::PrivateGatewayRecord;
    use crate::cosmic::routes::StaticRouteRecord;

    fn instance(id: &str, network_id: &str) -> Instance {
        Instance::new(
            "alpha",
            VirtualMachine {
                id: id.to_string(),
                name: format!("vm-{}", id),
                nic: vec![Nic {
                    networkid: network_id.to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        )
    }

    fn network(id: &str, name: &str, vpc_id: &str) -> Network {
        Network::new(
            "alpha",
            NetworkRecord {
                id: id.to_string(),
                name: name.to_string(),
                vpcid: vpc_id.to_string(),
                ..Default::default()
            },
        )
    }

    fn vpc_record(id: &str, name: &str, cidr: &str) -> VpcRecord {
        VpcRecord {
            id: id.to_string(),
            name: name.to_string(),
            cidr: cidr.to_string(),
            ..Default::default()
        }
    }

    fn vpc(id: &str, name: &str) -> Vpc {
        Vpc::new("alpha", vpc_record(id, name, "10.0.0.0/16"))
    }

    fn public_ip(ip: &str, vpc_id: &str, source_nat: bool) -> PublicIpAddress {
        PublicIpAddress {
            ipaddress: ip.to_string(),
            vpcid: vpc_id.to_string(),
            issourcenat: source_nat,
            ..Default::default()
        }
    }

    fn gateway(ip: &str, vpc_name: &str) -> PrivateGateway {
        let mut g = PrivateGateway::new(
            "alpha",
            PrivateGatewayRecord {
                ipaddress: ip.to_string(),
                ..Default::default()
            },
        );
        g.vpc_name = vpc_name.to_string();
        g
    }

    fn route(nexthop: &str) -> StaticRoute {
        StaticRoute::new(
            "alpha",
            StaticRouteRecord {
                cidr: "10.10.0.0/16".to_string(),
                nexthop: nexthop.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_attach_networks_full_chain() {
        let mut instances = vec![instance("1", "n-1"), instance("2", "n-2")];
        let networks = vec![network("n-1", "web", "v-1"), network("n-2", "flat", "")];
        let vpcs = vec![vpc("v-1", "prod")];

        attach_networks(&mut instances, &networks, &vpcs);

        assert_eq!(instances[0].network_name, "web");
        assert_eq!(instances[0].vpc_name, "prod");
        assert_eq!(instances[1].network_name, "flat");
        assert_eq!(instances[1].vpc_name, "");
        assert_eq!(instances[0].base.name, "vm-1");
    }

    #[test]
    fn test_attach_networks_unmatched_and_nicless() {
        let mut bare = instance("3", "");
        bare.base.nic.clear();
        let mut instances = vec![instance("1", "n-404"), bare];

        attach_networks(&mut instances, &[network("n-1", "web", "v-1")], &[]);

        assert!(instances.iter().all(|i| i.network_name.is_empty()));
        assert!(instances.iter().all(|i| i.vpc_name.is_empty()));
    }

    #[test]
    fn test_attach_networks_first_match_wins() {
        let mut instances = vec![instance("1", "n-1")];
        let networks = vec![network("n-1", "first", ""), network("n-1", "second", "")];

        attach_networks(&mut instances, &networks, &[]);

        assert_eq!(instances[0].network_name, "first");
    }

    #[test]
    fn test_attach_source_nat() {
        let mut vpcs = vec![vpc("v-1", "prod"), vpc("v-2", "test")];
        let ips = vec![
            public_ip("1.1.1.1", "v-1", false),
            public_ip("1.1.1.2", "v-1", true),
            public_ip("2.2.2.2", "", true),
        ];

        attach_source_nat(&mut vpcs, &ips);

        assert_eq!(vpcs[0].source_nat_ip, "1.1.1.2");
        assert_eq!(vpcs[1].source_nat_ip, "");
    }

    #[test]
    fn test_attach_source_nat_last_write_wins() {
        let mut vpcs = vec![vpc("v-1", "prod")];
        let ips = vec![
            public_ip("1.1.1.1", "v-1", true),
            public_ip("1.1.1.2", "v-1", true),
        ];

        attach_source_nat(&mut vpcs, &ips);

        assert_eq!(vpcs[0].source_nat_ip, "1.1.1.2");
    }

    #[test]
    fn test_attach_gateway_vpcs() {
        let mut gateways = vec![gateway("172.16.0.1", "")];
        gateways[0].base.vpcid = "v-1".to_string();

        attach_gateway_vpcs(&mut gateways, &[vpc("v-1", "prod")]);

        assert_eq!(gateways[0].vpc_name, "prod");
        assert_eq!(gateways[0].vpc_cidr, "10.0.0.0/16");
    }

    #[test]
    fn test_label_routes() {
        let mut routes = vec![route("172.16.0.1"), route("172.16.0.2"), route("8.8.8.8")];
        let gateways = vec![
            gateway("172.16.0.1", "prod"),
            gateway("172.16.0.2", "zeta"),
            gateway("172.16.0.2", "alpha"),
        ];

        label_routes(&mut routes, &gateways);

        assert_eq!(routes[0].vpc_name, "prod");
        assert_eq!(routes[1].vpc_name, "alpha, zeta");
        assert_eq!(routes[2].vpc_name, "");
    }

    #[test]
    fn test_attach_acl_vpcs() {
        let mut acls = vec![
            Acl::new(
                "alpha",
                AclListRecord {
                    id: "acl-1".to_string(),
                    vpcid: "v-1".to_string(),
                    ..Default::default()
                },
            ),
            Acl::new(
                "alpha",
                AclListRecord {
                    id: "default_allow".to_string(),
                    ..Default::default()
                },
            ),
        ];

        attach_acl_vpcs(&mut acls, &[vpc_record("v-1", "prod", "10.0.0.0/16")]);

        assert_eq!(acls[0].vpc_name, "prod");
        assert_eq!(acls[1].vpc_name, "");
    }

    fn owner(networkuuid: &str, networkname: &str, vpcname: &str, netmask: &str) -> AddressOwner {
        AddressOwner::new(
            "alpha",
            "zone-a",
            AddressRecord {
                ipaddress: "10.0.0.5".to_string(),
                networkuuid: networkuuid.to_string(),
                networkname: networkname.to_string(),
                vpcname: vpcname.to_string(),
                netmask: netmask.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_attach_address_networks_private_address() {
        let networks = vec![NetworkRecord {
            id: "n-1".to_string(),
            name: "web".to_string(),
            vpcid: "v-1".to_string(),
            ..Default::default()
        }];
        let vpcs = vec![vpc_record("v-1", "prod", "10.0.0.0/16")];
        let mut owners = vec![owner("n-1", "", "", "255.255.255.0")];

        attach_address_networks(&mut owners, &networks, &vpcs);

        assert_eq!(owners[0].base.networkname, "web");
        assert_eq!(owners[0].vpc_name, "prod");
        assert_eq!(owners[0].base.netmask, "255.255.255.0");
        assert_eq!(owners[0].zone_name, "zone-a");
    }

    #[test]
    fn test_attach_address_networks_public_address() {
        let mut owners = vec![owner("n-pub", "prod", "prod", "")];

        attach_address_networks(&mut owners, &[], &[]);

        assert_eq!(owners[0].base.networkname, "");
        assert_eq!(owners[0].vpc_name, "prod");
        assert_eq!(owners[0].base.netmask, "255.255.255.255");
    }
}
