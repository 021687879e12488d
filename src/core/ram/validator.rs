//! Role trust validation
//!
//! Checks that a role's current trust policy lets a given cloud service
//! assume it. The document is fetched on every call since it can change
//! between invocations.

use super::client::RamApi;
use crate::core::policy::parse_role_policy_document;
use crate::utils::error::{PolicyError, Result};
use tracing::{debug, error, warn};

/// Service principal of the Elastic Compute Service
pub const ECS_SERVICE_PRINCIPAL: &str = "ecs.aliyuncs.com";

/// Validates role trust policies against a required service principal
#[derive(Debug, Clone)]
pub struct TrustValidator<A> {
    api: A,
    required_service: String,
}

impl<A: RamApi> TrustValidator<A> {
    /// Create a validator requiring [`ECS_SERVICE_PRINCIPAL`]
    pub fn new(api: A) -> Self {
        Self {
            api,
            required_service: ECS_SERVICE_PRINCIPAL.to_string(),
        }
    }

    /// Require a different service principal
    pub fn with_required_service(mut self, service: impl Into<String>) -> Self {
        self.required_service = service.into();
        self
    }

    pub fn required_service(&self) -> &str {
        &self.required_service
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Succeeds when any statement of the role's trust policy names the
    /// required service. Principal entries are trimmed of spaces before
    /// comparing.
    pub async fn judge_role_policy_principal(&self, role_name: &str) -> Result<()> {
        let role = self.api.get_role(role_name).await.map_err(|e| {
            error!("GetRole {} failed: {}", role_name, e);
            PolicyError::upstream(role_name, e)
        })?;

        let document = role.assume_role_policy_document;
        let policy = parse_role_policy_document(&document)?;

        if policy.trusts_service(&self.required_service) {
            debug!(
                "Role {} trusts service {}",
                role_name, self.required_service
            );
            return Ok(());
        }

        warn!(
            "Role {} does not trust service {}",
            role_name, self.required_service
        );
        Err(PolicyError::validation(&self.required_service, document))
    }
}
