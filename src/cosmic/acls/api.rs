//! ACL API operations

use crate::config::benign;
use crate::cosmic::correlate::attach_acl_vpcs;
use crate::cosmic::instances::list_instances;
use crate::cosmic::networks::{list_networks, Network};
use crate::cosmic::{find_by_id, ClientSet, CosmicClient, CosmicResource};
use crate::error::{CosmicError, Result};

use super::models::{Acl, AclListRecord, AclRule, AclRuleRecord, AclTarget};

/// Errors that mean "this ACL is not in this profile"
const RULE_LOOKUP_BENIGN: &[&str] = &[
    benign::NO_PERMISSION,
    benign::ENTITY_DOES_NOT_EXIST,
    benign::NO_VPC_FOR_ACL,
];

impl CosmicClient {
    pub async fn list_acl_records(&self) -> Result<Vec<AclListRecord>> {
        self.list("listNetworkACLLists", &[], "networkacllist")
            .await
    }

    /// ACLs of this profile with zone and VPC names attached
    ///
    /// The ACL list carries neither, so zones and VPCs are fetched alongside.
    pub async fn list_acls(&self, profile: &str) -> Result<Vec<Acl>> {
        let (zone_name, vpcs, records) = tokio::try_join!(
            self.first_zone_name(),
            self.list_vpc_records(),
            self.list_acl_records()
        )?;

        let mut acls: Vec<Acl> = records
            .into_iter()
            .map(|record| {
                let mut acl = Acl::new(profile, record);
                acl.zone_name = zone_name.clone();
                acl
            })
            .collect();
        attach_acl_vpcs(&mut acls, &vpcs);
        Ok(acls)
    }

    pub async fn list_acl_rule_records(&self, acl_id: &str) -> Result<Vec<AclRuleRecord>> {
        self.list("listNetworkACLs", &[("aclid", acl_id)], "networkacl")
            .await
    }

    /// Rules of `acl` in this profile
    pub async fn list_acl_rules(&self, profile: &str, acl: &Acl) -> Result<Vec<AclRule>> {
        let records = self.list_acl_rule_records(&acl.base.id).await?;
        Ok(records
            .into_iter()
            .map(|r| AclRule::new(profile, &acl.base.name, r))
            .collect())
    }
}

/// ACLs of all profiles
pub async fn list_acls(clients: &ClientSet) -> Result<Vec<Acl>> {
    clients
        .fan_out(&[], |profile, client| client.list_acls(profile))
        .await
}

/// Rules of one ACL, from whichever profile owns it
pub async fn list_acl_rules(clients: &ClientSet, acl: &Acl) -> Result<Vec<AclRule>> {
    clients
        .fan_out(RULE_LOOKUP_BENIGN, |profile, client| {
            client.list_acl_rules(profile, acl)
        })
        .await
}

/// ACL attached to a network
fn network_acl(acls: &[Acl], network: &Network) -> Result<Acl> {
    if network.base.aclid.is_empty() {
        return Err(CosmicError::NotFound(format!(
            "Network {} has no ACL",
            network.name()
        )));
    }
    find_by_id(acls, &network.base.aclid).cloned()
}

/// Resolve an ACL directly or through an instance or network
///
/// Instances resolve through the network of their primary NIC. Every hop
/// must match exactly one entity.
pub async fn resolve_acl(clients: &ClientSet, target: &AclTarget) -> Result<Acl> {
    let selector = target.selector();

    match target {
        AclTarget::AclId(_) | AclTarget::AclName(_) => {
            let acls = list_acls(clients).await?;
            selector.find(&acls).cloned()
        }
        AclTarget::NetworkId(_) | AclTarget::NetworkName(_) => {
            let (acls, networks) = tokio::try_join!(list_acls(clients), list_networks(clients))?;
            let network = selector.find(&networks)?;
            network_acl(&acls, network)
        }
        AclTarget::InstanceId(_) | AclTarget::InstanceName(_) => {
            let (acls, networks, instances) = tokio::try_join!(
                list_acls(clients),
                list_networks(clients),
                list_instances(clients)
            )?;
            let instance = selector.find(&instances)?;
            let nic = instance.primary_nic().ok_or_else(|| {
                CosmicError::NotFound(format!(
                    "Instance {} has no network interfaces",
                    instance.name()
                ))
            })?;
            let network = find_by_id(&networks, &nic.networkid)?;
            network_acl(&acls, network)
        }
    }
}
