use serde::Deserialize;

/// Public IP address as returned by listPublicIpAddresses
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PublicIpAddress {
    pub id: String,
    pub ipaddress: String,
    pub issourcenat: bool,
    pub vpcid: String,
    pub zonename: String,
}
