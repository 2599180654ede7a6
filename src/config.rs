/// Configuration constants for the Cosmic API
pub mod api {
    /// Response format requested from the API
    pub const RESPONSE_FORMAT: &str = "json";

    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Interval between async job status polls in milliseconds
    pub const JOB_POLL_INTERVAL_MS: u64 = 1000;

    /// Async job still running
    pub const JOB_STATUS_PENDING: i64 = 0;

    /// Async job failed
    pub const JOB_STATUS_FAILED: i64 = 2;
}

/// Error substrings that mean "no results here" for some operations
pub mod benign {
    /// Entity lives in another profile
    pub const ENTITY_DOES_NOT_EXIST: &str = "entity does not exist";

    /// Caller has no access to the entity in this profile
    pub const NO_PERMISSION: &str = "does not have permission";

    /// ACL is one of the default (VPC-less) ACLs
    pub const NO_VPC_FOR_ACL: &str = "Unable to find VPC associated with acl";
}

/// Configuration constants for the profiles file
pub mod profiles {
    /// Directory under the home directory holding the config
    pub const DIR_NAME: &str = ".cosmic-cli";

    /// Config file name
    pub const FILE_NAME: &str = "config.toml";

    /// Environment variable overriding the config file path
    pub const ENV_VAR: &str = "COSMIC_CLI_CONFIG";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Netmask shown for addresses the API returns without one
    pub const HOST_NETMASK: &str = "255.255.255.255";
}
