//! Address ownership lookups

use crate::cosmic::correlate::attach_address_networks;
use crate::cosmic::{ClientSet, CosmicClient};
use crate::error::Result;

use super::models::{AddressOwner, AddressRecord};

/// Address kinds the API can look up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Ip,
    Mac,
}

impl AddressKind {
    fn command(self) -> &'static str {
        match self {
            AddressKind::Ip => "listWhoHasThisIp",
            AddressKind::Mac => "listWhoHasThisMac",
        }
    }

    fn param(self) -> &'static str {
        match self {
            AddressKind::Ip => "ipaddress",
            AddressKind::Mac => "macaddress",
        }
    }

    fn key(self) -> &'static str {
        match self {
            AddressKind::Ip => "whohasthisip",
            AddressKind::Mac => "whohasthismac",
        }
    }

    /// Field the results are narrowed on
    pub fn field(self) -> &'static str {
        self.param()
    }
}

impl CosmicClient {
    pub async fn who_has(&self, kind: AddressKind, address: &str) -> Result<Vec<AddressRecord>> {
        self.list(kind.command(), &[(kind.param(), address)], kind.key())
            .await
    }

    /// Owners of an address in this profile with zone, network and VPC names
    pub async fn lookup_address(
        &self,
        profile: &str,
        kind: AddressKind,
        address: &str,
    ) -> Result<Vec<AddressOwner>> {
        let (zone_name, networks, vpcs, records) = tokio::try_join!(
            self.first_zone_name(),
            self.list_network_records(),
            self.list_vpc_records(),
            self.who_has(kind, address)
        )?;

        let mut owners: Vec<AddressOwner> = records
            .into_iter()
            .map(|r| AddressOwner::new(profile, &zone_name, r))
            .collect();
        attach_address_networks(&mut owners, &networks, &vpcs);
        Ok(owners)
    }
}

/// Owners of an address across all profiles
pub async fn lookup_address(
    clients: &ClientSet,
    kind: AddressKind,
    address: &str,
) -> Result<Vec<AddressOwner>> {
    clients
        .fan_out(&[], |profile, client| {
            client.lookup_address(profile, kind, address)
        })
        .await
}
