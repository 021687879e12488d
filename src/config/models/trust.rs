//! Trust validation configuration

use crate::core::ram::ECS_SERVICE_PRINCIPAL;
use serde::{Deserialize, Serialize};

/// Settings for role trust validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Service principal a role must trust
    #[serde(default = "default_required_service")]
    pub required_service: String,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            required_service: default_required_service(),
        }
    }
}

fn default_required_service() -> String {
    ECS_SERVICE_PRINCIPAL.to_string()
}
