use serde::Deserialize;

use crate::cosmic::CosmicResource;

/// Network as returned by listNetworks
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct NetworkRecord {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub vpcid: String,
    pub aclid: String,
    pub zonename: String,
}

/// Network tagged with the profile it came from
#[derive(Debug, Clone)]
pub struct Network {
    pub base: NetworkRecord,
    pub profile: String,
}

impl Network {
    pub fn new(profile: &str, base: NetworkRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
        }
    }
}

impl CosmicResource for Network {
    const KIND: &'static str = "network";
    const ID_OPTION: &'static str = "network-id";

    fn id(&self) -> &str {
        &self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn profile(&self) -> &str {
        &self.profile
    }
}
