//! In-memory RAM API

use alicloud_ram::{RamApi, RamApiError, Role};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// RAM API backed by a map of role name to trust document
#[derive(Default)]
pub struct InMemoryRamApi {
    roles: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<String>>,
}

impl InMemoryRamApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(self, role_name: &str, document: &str) -> Self {
        self.set_document(role_name, document);
        self
    }

    /// Replace a role's trust document
    pub fn set_document(&self, role_name: &str, document: &str) {
        self.roles
            .lock()
            .unwrap()
            .insert(role_name.to_string(), document.to_string());
    }

    /// Role names requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RamApi for InMemoryRamApi {
    async fn get_role(&self, role_name: &str) -> Result<Role, RamApiError> {
        self.requests.lock().unwrap().push(role_name.to_string());

        let document = self
            .roles
            .lock()
            .unwrap()
            .get(role_name)
            .cloned()
            .ok_or_else(|| {
                RamApiError::api(
                    404,
                    "EntityNotExist.Role",
                    format!("The role not exists: {}.", role_name),
                )
            })?;

        Ok(Role {
            role_name: role_name.to_string(),
            arn: format!("acs:ram::123456789012:role/{}", role_name.to_lowercase()),
            assume_role_policy_document: document,
            ..Default::default()
        })
    }
}
