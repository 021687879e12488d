//! RAM client configuration
//!
//! Credentials, region and endpoint settings for the RAM API client.

use crate::config::Validate;
use crate::utils::error::{PolicyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Public RAM endpoint; RAM is a global service
pub const DEFAULT_RAM_ENDPOINT: &str = "https://ram.aliyuncs.com";

/// RAM API client configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RamConfig {
    /// Access key ID
    pub access_key_id: String,
    /// Access key secret
    pub access_key_secret: String,
    /// STS security token (optional, for temporary credentials)
    pub security_token: Option<String>,
    /// Region the provider operates in
    pub region: String,
    /// Endpoint override, e.g. a VPC endpoint
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RamConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            access_key_secret: String::new(),
            security_token: None,
            region: "cn-hangzhou".to_string(),
            endpoint: None,
            timeout_seconds: 30,
        }
    }
}

impl fmt::Debug for RamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RamConfig")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"<redacted>")
            .field(
                "security_token",
                &self.security_token.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl RamConfig {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
            ..Default::default()
        }
    }

    /// Effective endpoint
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_RAM_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Load configuration from the `ALICLOUD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("ALICLOUD_ACCESS_KEY") {
            config.access_key_id = key;
        }
        if let Some(secret) = lookup("ALICLOUD_SECRET_KEY") {
            config.access_key_secret = secret;
        }
        config.security_token = lookup("ALICLOUD_SECURITY_TOKEN").filter(|t| !t.is_empty());
        if let Some(region) = lookup("ALICLOUD_REGION") {
            config.region = region;
        }
        config.endpoint = lookup("ALICLOUD_RAM_ENDPOINT").filter(|e| !e.is_empty());
        if let Some(timeout) = lookup("ALICLOUD_TIMEOUT") {
            config.timeout_seconds = timeout
                .parse()
                .map_err(|e| PolicyError::config(format!("Invalid ALICLOUD_TIMEOUT: {}", e)))?;
        }

        Ok(config)
    }
}

impl Validate for RamConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.access_key_id.is_empty() {
            return Err("Access key ID is required".to_string());
        }
        if self.access_key_secret.is_empty() {
            return Err("Access key secret is required".to_string());
        }
        if self.region.is_empty() {
            return Err("Region is required".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        let endpoint = url::Url::parse(self.endpoint())
            .map_err(|e| format!("Endpoint has invalid URL format: {}", e))?;
        match endpoint.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(format!(
                "Endpoint must use http:// or https:// scheme, got: {}",
                scheme
            )),
        }
    }
}
