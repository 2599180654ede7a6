//! Instance API operations

use crate::cosmic::{ClientSet, CosmicClient};
use crate::error::Result;

use super::models::{Instance, VirtualMachine};

impl CosmicClient {
    pub async fn list_virtual_machines(&self) -> Result<Vec<VirtualMachine>> {
        self.list("listVirtualMachines", &[], "virtualmachine")
            .await
    }

    /// Instances of this profile, tagged with its name
    pub async fn list_instances(&self, profile: &str) -> Result<Vec<Instance>> {
        let vms = self.list_virtual_machines().await?;
        Ok(vms.into_iter().map(|vm| Instance::new(profile, vm)).collect())
    }
}

/// Instances of all profiles
pub async fn list_instances(clients: &ClientSet) -> Result<Vec<Instance>> {
    clients
        .fan_out(&[], |profile, client| client.list_instances(profile))
        .await
}
