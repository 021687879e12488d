//! RAM HTTP client
//!
//! `RamApi` is the seam the trust validator depends on; `RamClient` is the
//! reqwest-backed implementation that calls the public RAM endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error};

use super::config::RamConfig;
use super::error::{RamApiError, RamErrorMapper};
use super::signer::{RpcSigner, canonical_query};
use super::types::{GetRoleResponse, Role};
use crate::config::Validate;

/// RAM API version implemented by this client
pub const RAM_API_VERSION: &str = "2015-05-01";

/// Operations the RAM API exposes to this crate
#[async_trait]
pub trait RamApi: Send + Sync {
    /// Fetch a role, including its current trust policy document
    async fn get_role(&self, role_name: &str) -> Result<Role, RamApiError>;
}

#[async_trait]
impl<T: RamApi + ?Sized> RamApi for Arc<T> {
    async fn get_role(&self, role_name: &str) -> Result<Role, RamApiError> {
        (**self).get_role(role_name).await
    }
}

/// RAM HTTP client
#[derive(Debug, Clone)]
pub struct RamClient {
    http: Client,
    endpoint: String,
    signer: RpcSigner,
    error_mapper: RamErrorMapper,
}

impl RamClient {
    /// Create a new RAM client
    pub fn new(config: &RamConfig) -> Result<Self, RamApiError> {
        config.validate().map_err(RamApiError::configuration)?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RamApiError::configuration(e.to_string()))?;

        let signer = RpcSigner::new(
            config.access_key_id.clone(),
            config.access_key_secret.clone(),
            config.security_token.clone(),
        );

        Ok(Self {
            http,
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            signer,
            error_mapper: RamErrorMapper,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the signed request URL for an action
    pub fn build_url(
        &self,
        action: &str,
        mut params: BTreeMap<String, String>,
    ) -> Result<String, RamApiError> {
        params.insert("Action".to_string(), action.to_string());
        params.insert("Format".to_string(), "JSON".to_string());
        params.insert("Version".to_string(), RAM_API_VERSION.to_string());

        let nonce = uuid::Uuid::new_v4().to_string();
        self.signer
            .sign("GET", &mut params, chrono::Utc::now(), &nonce)?;

        Ok(format!("{}/?{}", self.endpoint, canonical_query(&params)))
    }

    /// Send an RPC request and return the raw response body
    async fn send_request(
        &self,
        action: &str,
        params: BTreeMap<String, String>,
    ) -> Result<String, RamApiError> {
        let url = self.build_url(action, params)?;
        debug!("RAM request: {} to {}", action, self.endpoint);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.error_mapper.map_network_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.error_mapper.map_network_error(&e))?;

        if !status.is_success() {
            error!("RAM API error: {} - {}", status.as_u16(), body);
            return Err(self.error_mapper.map_http_error(status.as_u16(), &body));
        }

        Ok(body)
    }
}

#[async_trait]
impl RamApi for RamClient {
    async fn get_role(&self, role_name: &str) -> Result<Role, RamApiError> {
        let mut params = BTreeMap::new();
        params.insert("RoleName".to_string(), role_name.to_string());

        let body = self.send_request("GetRole", params).await?;
        let response: GetRoleResponse = serde_json::from_str(&body)
            .map_err(|e| self.error_mapper.map_parsing_error(&e))?;

        debug!(
            "GetRole {} succeeded (request id {})",
            role_name,
            response.request_id.as_deref().unwrap_or("-")
        );
        Ok(response.role)
    }
}
