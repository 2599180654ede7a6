use serde::Deserialize;

use crate::pipeline::{Field, FieldValue, Fields};

/// Row returned by listWhoHasThisIp and listWhoHasThisMac
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AddressRecord {
    pub uuid: String,
    pub ipaddress: String,
    pub netmask: String,
    pub macaddress: String,
    pub networkuuid: String,
    pub networkname: String,
    pub vpcname: String,
    pub virtualmachinename: String,
    pub virtualmachinetype: String,
    pub domainname: String,
}

/// Owner of an IP or MAC address
#[derive(Debug, Clone)]
pub struct AddressOwner {
    pub base: AddressRecord,
    pub profile: String,
    pub vpc_name: String,
    pub zone_name: String,
}

impl AddressOwner {
    pub fn new(profile: &str, zone_name: &str, base: AddressRecord) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            vpc_name: String::new(),
            zone_name: zone_name.to_string(),
        }
    }
}

impl Fields for AddressOwner {
    const LABEL: &'static str = "IP address";
    const SORT_FIELDS: &'static [&'static str] =
        &["ipaddress", "macaddress", "networkname", "vpcname", "zonename"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "ipaddress",
            get: |a| FieldValue::text(&a.base.ipaddress),
        },
        Field {
            name: "netmask",
            get: |a| FieldValue::text(&a.base.netmask),
        },
        Field {
            name: "macaddress",
            get: |a| FieldValue::text(&a.base.macaddress),
        },
        Field {
            name: "networkname",
            get: |a| FieldValue::text(&a.base.networkname),
        },
        Field {
            name: "vpcname",
            get: |a| FieldValue::text(&a.vpc_name),
        },
        Field {
            name: "virtualmachinename",
            get: |a| FieldValue::text(&a.base.virtualmachinename),
        },
        Field {
            name: "virtualmachinetype",
            get: |a| FieldValue::text(&a.base.virtualmachinetype),
        },
        Field {
            name: "domainname",
            get: |a| FieldValue::text(&a.base.domainname),
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
