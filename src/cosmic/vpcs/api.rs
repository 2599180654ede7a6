//! VPC API operations

use crate::config::benign;
use crate::cosmic::{ClientSet, CosmicClient, Selector};
use crate::error::Result;

use super::models::{Vpc, VpcRecord};

impl CosmicClient {
    pub async fn list_vpc_records(&self) -> Result<Vec<VpcRecord>> {
        self.list("listVPCs", &[], "vpc").await
    }

    /// VPCs of this profile, tagged with its name
    pub async fn list_vpcs(&self, profile: &str) -> Result<Vec<Vpc>> {
        let records = self.list_vpc_records().await?;
        Ok(records.into_iter().map(|v| Vpc::new(profile, v)).collect())
    }

    /// VPCs of this profile matching a selector
    ///
    /// The API matches names loosely, so callers still have to compare names
    /// exactly.
    pub async fn find_vpcs(&self, profile: &str, selector: &Selector) -> Result<Vec<Vpc>> {
        let param = match selector {
            Selector::Id(id) => ("id", id.as_str()),
            Selector::Name(name) => ("name", name.as_str()),
        };
        let records: Vec<VpcRecord> = self.list("listVPCs", &[param], "vpc").await?;
        Ok(records.into_iter().map(|v| Vpc::new(profile, v)).collect())
    }
}

/// VPCs of all profiles
pub async fn list_vpcs(clients: &ClientSet) -> Result<Vec<Vpc>> {
    clients
        .fan_out(&[], |profile, client| client.list_vpcs(profile))
        .await
}

/// Resolve a selector to exactly one VPC across all profiles
///
/// Profiles that do not know the VPC are skipped.
pub async fn resolve_vpc(clients: &ClientSet, selector: &Selector) -> Result<Vpc> {
    let vpcs = clients
        .fan_out(&[benign::ENTITY_DOES_NOT_EXIST], |profile, client| {
            client.find_vpcs(profile, selector)
        })
        .await?;

    selector.find(&vpcs).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmic::testing::{client_set, mount_error, mount_list};
    use crate::cosmic::CosmicResource;
    use crate::error::CosmicError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_vpc_by_name(server: &MockServer, name: &str, id: &str) {
        Mock::given(method("GET"))
            .and(path("/client/api"))
            .and(query_param("command", "listVPCs"))
            .and(query_param("name", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "listvpcsresponse": {
                    "count": 1,
                    "vpc": [{"id": id, "name": name, "cidr": "10.0.0.0/16"}]
                }
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_list_vpcs() {
        let alpha = MockServer::start().await;
        mount_list(
            &alpha,
            "listVPCs",
            "vpc",
            serde_json::json!([
                {"id": "v-1", "name": "prod", "cidr": "10.0.0.0/16", "redundantvpcrouter": true},
                {"id": "v-2", "name": "test", "cidr": "10.1.0.0/16"}
            ]),
        )
        .await;

        let clients = client_set(&[("alpha", &alpha)]);
        let vpcs = list_vpcs(&clients).await.unwrap();
        assert_eq!(vpcs.len(), 2);
        assert!(vpcs.iter().all(|v| v.profile() == "alpha"));
        assert!(vpcs.iter().any(|v| v.base.redundantvpcrouter));
    }

    #[tokio::test]
    async fn test_resolve_vpc_by_name_single_profile() {
        let alpha = MockServer::start().await;
        let beta = MockServer::start().await;
        mount_vpc_by_name(&alpha, "prod-vpc", "v-1").await;
        mount_error(&beta, "listVPCs", 431, "entity does not exist").await;

        let clients = client_set(&[("alpha", &alpha), ("beta", &beta)]);
        let vpc = resolve_vpc(&clients, &Selector::Name("prod-vpc".to_string()))
            .await
            .unwrap();
        assert_eq!(vpc.id(), "v-1");
        assert_eq!(vpc.profile(), "alpha");
    }

    #[tokio::test]
    async fn test_resolve_vpc_by_name_ambiguous() {
        let alpha = MockServer::start().await;
        let beta = MockServer::start().await;
        mount_vpc_by_name(&alpha, "prod-vpc", "v-1").await;
        mount_vpc_by_name(&beta, "prod-vpc", "v-9").await;

        let clients = client_set(&[("alpha", &alpha), ("beta", &beta)]);
        let err = resolve_vpc(&clients, &Selector::Name("prod-vpc".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, CosmicError::Ambiguous(_)));
        let msg = err.to_string();
        assert!(msg.contains("v-1 in profile alpha"));
        assert!(msg.contains("v-9 in profile beta"));
        assert!(msg.contains("--vpc-id"));
    }

    #[tokio::test]
    async fn test_resolve_vpc_ignores_loose_name_matches() {
        let alpha = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/client/api"))
            .and(query_param("command", "listVPCs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "listvpcsresponse": {
                    "count": 2,
                    "vpc": [
                        {"id": "v-1", "name": "prod"},
                        {"id": "v-2", "name": "prod-old"}
                    ]
                }
            })))
            .mount(&alpha)
            .await;

        let clients = client_set(&[("alpha", &alpha)]);
        let vpc = resolve_vpc(&clients, &Selector::Name("prod".to_string()))
            .await
            .unwrap();
        assert_eq!(vpc.id(), "v-1");
    }

    #[tokio::test]
    async fn test_resolve_vpc_not_found() {
        let alpha = MockServer::start().await;
        mount_error(&alpha, "listVPCs", 431, "entity does not exist").await;

        let clients = client_set(&[("alpha", &alpha)]);
        let err = resolve_vpc(&clients, &Selector::Id("v-404".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No match found for VPC with id v-404");
    }
}
