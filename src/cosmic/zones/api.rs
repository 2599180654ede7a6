//! Zone API operations

use crate::cosmic::CosmicClient;
use crate::error::Result;

use super::models::Zone;

impl CosmicClient {
    /// List zones of this profile
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.list("listZones", &[], "zone").await
    }

    /// Name of the first zone, or empty when the profile has none
    pub async fn first_zone_name(&self) -> Result<String> {
        Ok(self
            .list_zones()
            .await?
            .into_iter()
            .next()
            .map(|z| z.name)
            .unwrap_or_default())
    }
}
