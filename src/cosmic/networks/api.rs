//! Network API operations

use crate::cosmic::{ClientSet, CosmicClient};
use crate::error::Result;

use super::models::{Network, NetworkRecord};

impl CosmicClient {
    pub async fn list_network_records(&self) -> Result<Vec<NetworkRecord>> {
        self.list("listNetworks", &[], "network").await
    }

    /// Networks of this profile, tagged with its name
    pub async fn list_networks(&self, profile: &str) -> Result<Vec<Network>> {
        let records = self.list_network_records().await?;
        Ok(records
            .into_iter()
            .map(|n| Network::new(profile, n))
            .collect())
    }
}

/// Networks of all profiles
pub async fn list_networks(clients: &ClientSet) -> Result<Vec<Network>> {
    clients
        .fan_out(&[], |profile, client| client.list_networks(profile))
        .await
}
