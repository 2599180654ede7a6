//! Static route API operations

use crate::config::benign;
use crate::cosmic::{ClientSet, CosmicClient};
use crate::error::Result;

use super::models::{StaticRoute, StaticRouteRecord};

impl CosmicClient {
    pub async fn list_static_route_records(&self, vpc_id: &str) -> Result<Vec<StaticRouteRecord>> {
        self.list("listStaticRoutes", &[("vpcid", vpc_id)], "staticroute")
            .await
    }

    /// Static routes of one VPC in this profile, tagged with its name
    pub async fn list_static_routes(&self, profile: &str, vpc_id: &str) -> Result<Vec<StaticRoute>> {
        let records = self.list_static_route_records(vpc_id).await?;
        Ok(records
            .into_iter()
            .map(|r| StaticRoute::new(profile, r))
            .collect())
    }

    /// Create a static route and wait for the job to finish
    pub async fn create_static_route(&self, vpc_id: &str, cidr: &str, nexthop: &str) -> Result<()> {
        self.execute_async(
            "createStaticRoute",
            &[("cidr", cidr), ("nexthop", nexthop), ("vpcid", vpc_id)],
        )
        .await?;
        Ok(())
    }

    /// Delete a static route and wait for the job to finish
    pub async fn delete_static_route(&self, id: &str) -> Result<()> {
        self.execute_async("deleteStaticRoute", &[("id", id)])
            .await?;
        Ok(())
    }
}

/// Static routes of a VPC, from whichever profile owns it
pub async fn list_static_routes(clients: &ClientSet, vpc_id: &str) -> Result<Vec<StaticRoute>> {
    clients
        .fan_out(&[benign::ENTITY_DOES_NOT_EXIST], |profile, client| {
            client.list_static_routes(profile, vpc_id)
        })
        .await
}

/// Create a route in every profile that knows the VPC
///
/// Returns the profiles the route was created in.
pub async fn create_static_route(
    clients: &ClientSet,
    vpc_id: &str,
    cidr: &str,
    nexthop: &str,
) -> Result<Vec<String>> {
    clients
        .fan_out(&[benign::ENTITY_DOES_NOT_EXIST], |profile, client| async move {
            client
                .create_static_route(vpc_id, cidr, nexthop)
                .await
                .map(|()| vec![profile.to_string()])
        })
        .await
}

/// Delete a route from every profile that knows it
///
/// Returns the profiles the route was deleted from.
pub async fn delete_static_route(clients: &ClientSet, id: &str) -> Result<Vec<String>> {
    clients
        .fan_out(&[benign::ENTITY_DOES_NOT_EXIST], |profile, client| async move {
            client
                .delete_static_route(id)
                .await
                .map(|()| vec![profile.to_string()])
        })
        .await
}
