use serde::Deserialize;

use crate::pipeline::{Field, FieldValue, Fields};

/// Private gateway as returned by listPrivateGateways
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PrivateGatewayRecord {
    pub id: String,
    pub ipaddress: String,
    pub cidr: String,
    pub gateway: String,
    pub netmask: String,
    pub networkid: String,
    pub networkname: String,
    pub vpcid: String,
    pub zonename: String,
    pub state: String,
}

/// Private gateway with the name and CIDR of its VPC
#[derive(Debug, Clone)]
pub struct PrivateGateway {
    pub base: PrivateGatewayRecord,
    pub profile: String,
    pub vpc_name: String,
    pub vpc_cidr: String,
}

impl PrivateGateway {
    pub fn new(profile: &str, base: PrivateGatewayRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            vpc_name: String::new(),
            vpc_cidr: String::new(),
        }
    }
}

impl Fields for PrivateGateway {
    const LABEL: &'static str = "private gateway";
    const SORT_FIELDS: &'static [&'static str] =
        &["cidr", "ipaddress", "vpccidr", "vpcname", "zonename"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            get: |g| FieldValue::text(&g.base.id),
        },
        Field {
            name: "ipaddress",
            get: |g| FieldValue::text(&g.base.ipaddress),
        },
        Field {
            name: "cidr",
            get: |g| FieldValue::text(&g.base.cidr),
        },
        Field {
            name: "gateway",
            get: |g| FieldValue::text(&g.base.gateway),
        },
        Field {
            name: "netmask",
            get: |g| FieldValue::text(&g.base.netmask),
        },
        Field {
            name: "networkid",
            get: |g| FieldValue::text(&g.base.networkid),
        },
        Field {
            name: "networkname",
            get: |g| FieldValue::text(&g.base.networkname),
        },
        Field {
            name: "vpcid",
            get: |g| FieldValue::text(&g.base.vpcid),
        },
        Field {
            name: "vpcname",
            get: |g| FieldValue::text(&g.vpc_name),
        },
        Field {
            name: "vpccidr",
            get: |g| FieldValue::text(&g.vpc_cidr),
        },
        Field {
            name: "zonename",
            get: |g| FieldValue::text(&g.base.zonename),
        },
        Field {
            name: "state",
            get: |g| FieldValue::text(&g.base.state),
        },
        Field {
            name: "profile",
            get: |g| FieldValue::text(&g.profile),
        },
    ];
}
