use serde::Deserialize;

use crate::pipeline::{Field, FieldValue, Fields};

/// Static route as returned by listStaticRoutes
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StaticRouteRecord {
    pub id: String,
    pub cidr: String,
    pub nexthop: String,
    pub vpcid: String,
    pub state: String,
}

/// Static route labelled with the VPC behind its next hop
#[derive(Debug, Clone)]
pub struct StaticRoute {
    pub base: StaticRouteRecord,
    pub profile: String,
    /// Names of the VPCs owning a private gateway at the next hop
    pub vpc_name: String,
}

impl StaticRoute {
    pub fn new(profile: &str, base: StaticRouteRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            vpc_name: String::new(),
        }
    }
}

impl Fields for StaticRoute {
    const LABEL: &'static str = "static route";
    const SORT_FIELDS: &'static [&'static str] = &["cidr", "nexthop"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            get: |r| FieldValue::text(&r.base.id),
        },
        Field {
            name: "cidr",
            get: |r| FieldValue::text(&r.base.cidr),
        },
        Field {
            name: "nexthop",
            get: |r| FieldValue::text(&r.base.nexthop),
        },
        Field {
            name: "vpcid",
            get: |r| FieldValue::text(&r.base.vpcid),
        },
        Field {
            name: "vpcname",
            get: |r| FieldValue::text(&r.vpc_name),
        },
        Field {
            name: "state",
            get: |r| FieldValue::text(&r.base.state),
        },
        Field {
            name: "profile",
            get: |r| FieldValue::text(&r.profile),
        },
    ];
}
