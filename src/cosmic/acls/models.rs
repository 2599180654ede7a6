use serde::Deserialize;

use crate::cosmic::{CosmicResource, Selector};
use crate::pipeline::{Field, FieldValue, Fields};

/// ACL as returned by listNetworkACLLists
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AclListRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub vpcid: String,
}

/// ACL rule as returned by listNetworkACLs
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AclRuleRecord {
    pub id: String,
    pub aclid: String,
    pub action: String,
    pub cidrlist: String,
    pub protocol: String,
    pub startport: String,
    pub endport: String,
    pub icmpcode: i64,
    pub icmptype: i64,
    pub number: i64,
    pub traffictype: String,
    pub state: String,
}

/// What `acl rule list` resolves to an ACL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AclTarget {
    AclId(String),
    AclName(String),
    InstanceId(String),
    InstanceName(String),
    NetworkId(String),
    NetworkName(String),
}

impl AclTarget {
    /// Lookup of the entity the target names
    pub fn selector(&self) -> Selector {
        match self {
            AclTarget::AclId(id) | AclTarget::InstanceId(id) | AclTarget::NetworkId(id) => {
                Selector::Id(id.clone())
            }
            AclTarget::AclName(name)
            | AclTarget::InstanceName(name)
            | AclTarget::NetworkName(name) => Selector::Name(name.clone()),
        }
    }
}

/// ACL with the names of its zone and VPC
#[derive(Debug, Clone)]
pub struct Acl {
    pub base: AclListRecord,
    pub profile: String,
    pub vpc_name: String,
    pub zone_name: String,
}

impl Acl {
    pub fn new(profile: &str, base: AclListRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            vpc_name: String::new(),
            zone_name: String::new(),
        }
    }
}

impl CosmicResource for Acl {
    const KIND: &'static str = "ACL";
    const ID_OPTION: &'static str = "acl-id";

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

impl Fields for Acl {
    const LABEL: &'static str = "ACL";
    const SORT_FIELDS: &'static [&'static str] = &["name", "vpcname", "zonename"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            get: |a| FieldValue::text(&a.base.id),
        },
        Field {
            name: "name",
            get: |a| FieldValue::text(&a.base.name),
        },
        Field {
            name: "description",
            get: |a| FieldValue::text(&a.base.description),
        },
        Field {
            name: "vpcid",
            get: |a| FieldValue::text(&a.base.vpcid),
        },
        Field {
            name: "vpcname",
            get: |a| FieldValue::text(&a.vpc_name),
        },
        Field {
            name: "zonename",
            get: |a| FieldValue::text(&a.zone_name),
        },
        Field {
            name: "profile",
            get: |a| FieldValue::text(&a.profile),
        },
    ];
}

/// ACL rule with the name of its ACL
#[derive(Debug, Clone)]
pub struct AclRule {
    pub base: AclRuleRecord,
    pub profile: String,
    pub acl_name: String,
}

impl AclRule {
    pub fn new(profile: &str, acl_name: &str, base: AclRuleRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            acl_name: acl_name.to_string(),
        }
    }
}

impl Fields for AclRule {
    const LABEL: &'static str = "ACL rule";
    const SORT_FIELDS: &'static [&'static str] =
        &["action", "cidrlist", "endport", "number", "startport"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            get: |r| FieldValue::text(&r.base.id),
        },
        Field {
            name: "aclid",
            get: |r| FieldValue::text(&r.base.aclid),
        },
        Field {
            name: "aclname",
            get: |r| FieldValue::text(&r.acl_name),
        },
        Field {
            name: "action",
            get: |r| FieldValue::text(&r.base.action),
        },
        Field {
            name: "cidrlist",
            get: |r| FieldValue::text(&r.base.cidrlist),
        },
        Field {
            name: "protocol",
            get: |r| FieldValue::text(&r.base.protocol),
        },
        Field {
            name: "startport",
            get: |r| FieldValue::text(&r.base.startport),
        },
        Field {
            name: "endport",
            get: |r| FieldValue::text(&r.base.endport),
        },
        Field {
            name: "icmpcode",
            get: |r| FieldValue::Number(r.base.icmpcode),
        },
        Field {
            name: "icmptype",
            get: |r| FieldValue::Number(r.base.icmptype),
        },
        Field {
            name: "number",
            get: |r| FieldValue::Number(r.base.number),
        },
        Field {
            name: "traffictype",
            get: |r| FieldValue::text(&r.base.traffictype),
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
