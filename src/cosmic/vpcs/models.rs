use serde::Deserialize;

use crate::cosmic::CosmicResource;
use crate::pipeline::{Field, FieldValue, Fields};

/// VPC as returned by listVPCs
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VpcRecord {
    pub id: String,
    pub name: String,
    pub displaytext: String,
    pub cidr: String,
    pub vpcofferingname: String,
    pub zonename: String,
    pub state: String,
    pub networkdomain: String,
    pub redundantvpcrouter: bool,
    pub restartrequired: bool,
}

/// VPC with its profile and source NAT address
#[derive(Debug, Clone)]
pub struct Vpc {
    pub base: VpcRecord,
    pub profile: String,
    pub source_nat_ip: String,
}

impl Vpc {
    pub fn new(profile: &str, base: VpcRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            source_nat_ip: String::new(),
        }
    }
}

impl CosmicResource for Vpc {
    const KIND: &'static str = "VPC";
    const ID_OPTION: &'static str = "vpc-id";

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

impl Fields for Vpc {
    const LABEL: &'static str = "VPC";
    const SORT_FIELDS: &'static [&'static str] = &["cidr", "name", "vpcofferingname", "zonename"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            get: |v| FieldValue::text(&v.base.id),
        },
        Field {
            name: "name",
            get: |v| FieldValue::text(&v.base.name),
        },
        Field {
            name: "displaytext",
            get: |v| FieldValue::text(&v.base.displaytext),
        },
        Field {
            name: "cidr",
            get: |v| FieldValue::text(&v.base.cidr),
        },
        Field {
            name: "vpcofferingname",
            get: |v| FieldValue::text(&v.base.vpcofferingname),
        },
        Field {
            name: "zonename",
            get: |v| FieldValue::text(&v.base.zonename),
        },
        Field {
            name: "state",
            get: |v| FieldValue::text(&v.base.state),
        },
        Field {
            name: "networkdomain",
            get: |v| FieldValue::text(&v.base.networkdomain),
        },
        Field {
            name: "redundantvpcrouter",
            get: |v| FieldValue::Bool(v.base.redundantvpcrouter),
        },
        Field {
            name: "restartrequired",
            get: |v| FieldValue::Bool(v.base.restartrequired),
        },
        Field {
            name: "sourcenatip",
            get: |v| FieldValue::text(&v.source_nat_ip),
        },
        Field {
            name: "profile",
            get: |v| FieldValue::text(&v.profile),
        },
    ];
}
