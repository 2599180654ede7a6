//! Private gateway API operations

use crate::config::benign;
use crate::cosmic::correlate::attach_gateway_vpcs;
use crate::cosmic::vpcs::list_vpcs;
use crate::cosmic::{ClientSet, CosmicClient};
use crate::error::Result;

use super::models::{PrivateGateway, PrivateGatewayRecord};

impl CosmicClient {
    pub async fn list_private_gateway_records(&self) -> Result<Vec<PrivateGatewayRecord>> {
        self.list("listPrivateGateways", &[], "privategateway")
            .await
    }

    /// Private gateways of this profile, tagged with its name
    pub async fn list_private_gateways(&self, profile: &str) -> Result<Vec<PrivateGateway>> {
        let records = self.list_private_gateway_records().await?;
        Ok(records
            .into_iter()
            .map(|g| PrivateGateway::new(profile, g))
            .collect())
    }
}

/// Private gateways of all profiles with their VPC name and CIDR
pub async fn list_private_gateways(clients: &ClientSet) -> Result<Vec<PrivateGateway>> {
    let gateways = clients.fan_out(&[benign::ENTITY_DOES_NOT_EXIST], |profile, client| {
        client.list_private_gateways(profile)
    });
    let (mut gateways, vpcs) = tokio::try_join!(gateways, list_vpcs(clients))?;

    attach_gateway_vpcs(&mut gateways, &vpcs);
    Ok(gateways)
}
