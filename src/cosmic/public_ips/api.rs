//! Public IP API operations

use crate::cosmic::{ClientSet, CosmicClient};
use crate::error::Result;

use super::models::PublicIpAddress;

impl CosmicClient {
    pub async fn list_public_ip_addresses(&self) -> Result<Vec<PublicIpAddress>> {
        self.list("listPublicIpAddresses", &[], "publicipaddress")
            .await
    }
}

/// Public IPs of all profiles
pub async fn list_public_ips(clients: &ClientSet) -> Result<Vec<PublicIpAddress>> {
    clients
        .fan_out(&[], |_, client| client.list_public_ip_addresses())
        .await
}
