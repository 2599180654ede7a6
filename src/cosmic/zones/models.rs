use serde::Deserialize;

/// Zone as returned by listZones
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Zone {
    pub id: String,
    pub name: String,
}
