use serde::Deserialize;

use crate::cosmic::CosmicResource;
use crate::pipeline::{Field, FieldValue, Fields};

/// Network interface of a virtual machine
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Nic {
    pub id: String,
    pub networkid: String,
    pub networkname: String,
    pub ipaddress: String,
    pub macaddress: String,
    pub netmask: String,
    pub isdefault: bool,
}

/// Virtual machine as returned by listVirtualMachines
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VirtualMachine {
    pub id: String,
    pub name: String,
    pub displayname: String,
    pub instancename: String,
    pub state: String,
    pub zoneid: String,
    pub zonename: String,
    pub hostname: String,
    pub serviceofferingname: String,
    pub templatename: String,
    pub version: String,
    pub nic: Vec<Nic>,
}

/// Virtual machine with its profile and network placement
#[derive(Debug, Clone)]
pub struct Instance {
    pub base: VirtualMachine,
    pub profile: String,
    pub network_name: String,
    pub vpc_name: String,
}

impl Instance {
    pub fn new(profile: &str, base: VirtualMachine) -> Self {
        Self {
            base,
            profile: profile.to_string(),
            network_name: String::new(),
            vpc_name: String::new(),
        }
    }

    /// The first NIC
    pub fn primary_nic(&self) -> Option<&Nic> {
        self.base.nic.first()
    }

    /// Address of the primary NIC, empty without NICs
    pub fn ip_address(&self) -> &str {
        self.primary_nic().map(|n| n.ipaddress.as_str()).unwrap_or("")
    }
}

impl CosmicResource for Instance {
    const KIND: &'static str = "instance";
    const ID_OPTION: &'static str = "instance-id";

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

impl Fields for Instance {
    const LABEL: &'static str = "instance";
    const SORT_FIELDS: &'static [&'static str] = &["ipaddress", "name", "zonename"];
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            get: |i| FieldValue::text(&i.base.id),
        },
        Field {
            name: "name",
            get: |i| FieldValue::text(&i.base.name),
        },
        Field {
            name: "displayname",
            get: |i| FieldValue::text(&i.base.displayname),
        },
        Field {
            name: "instancename",
            get: |i| FieldValue::text(&i.base.instancename),
        },
        Field {
            name: "state",
            get: |i| FieldValue::text(&i.base.state),
        },
        Field {
            name: "ipaddress",
            get: |i| FieldValue::text(i.ip_address()),
        },
        Field {
            name: "macaddress",
            get: |i| FieldValue::text(i.primary_nic().map(|n| n.macaddress.as_str()).unwrap_or("")),
        },
        Field {
            name: "zonename",
            get: |i| FieldValue::text(&i.base.zonename),
        },
        Field {
            name: "hostname",
            get: |i| FieldValue::text(&i.base.hostname),
        },
        Field {
            name: "serviceofferingname",
            get: |i| FieldValue::text(&i.base.serviceofferingname),
        },
        Field {
            name: "templatename",
            get: |i| FieldValue::text(&i.base.templatename),
        },
        Field {
            name: "version",
            get: |i| FieldValue::text(&i.base.version),
        },
        Field {
            name: "networkname",
            get: |i| FieldValue::text(&i.network_name),
        },
        Field {
            name: "vpcname",
            get: |i| FieldValue::text(&i.vpc_name),
        },
        Field {
            name: "profile",
            get: |i| FieldValue::text(&i.profile),
        },
    ];
}
