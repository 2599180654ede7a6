//! Profile configuration data models

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::api;

/// Top-level profile configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ProfileConfig {
    /// Map of profile name to profile configuration
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// A named API endpoint with credentials
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// API base URL (e.g. https://cosmic.example.com/client/api)
    pub api_url: String,
    /// API key
    pub api_key: String,
    /// Secret key used to sign requests
    pub secret_key: String,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Verify the server certificate
    #[serde(default)]
    pub verify_ssl: Option<bool>,
}

impl Profile {
    /// Effective request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(api::DEFAULT_TIMEOUT_SECS))
    }

    /// Effective TLS verification policy
    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl.unwrap_or(true)
    }

    /// Two profiles pointing at the same endpoint with the same credentials
    pub fn is_duplicate_of(&self, other: &Profile) -> bool {
        self.api_url == other.api_url
            && self.api_key == other.api_key
            && self.secret_key == other.secret_key
    }
}
