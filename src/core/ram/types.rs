//! RAM API wire types

use serde::{Deserialize, Serialize};

/// Role record returned by `GetRole`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Role {
    pub role_id: String,
    pub role_name: String,
    pub arn: String,
    pub description: String,
    /// Raw trust policy JSON
    pub assume_role_policy_document: String,
    pub create_date: String,
    pub update_date: String,
}

/// `GetRole` response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoleResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    pub role: Role,
}
