//! Decoding of policy documents from JSON text

use super::types::{Policy, RolePolicy};
use crate::utils::error::{DocumentKind, PolicyError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Decode a role trust policy document
pub fn parse_role_policy_document(document: &str) -> Result<RolePolicy> {
    decode(DocumentKind::RolePolicy, document)
}

/// Decode a resource access policy document
pub fn parse_policy_document(document: &str) -> Result<Policy> {
    decode(DocumentKind::Policy, document)
}

fn decode<T: DeserializeOwned>(kind: DocumentKind, document: &str) -> Result<T> {
    serde_json::from_str(document).map_err(|e| {
        debug!("Rejected {} document: {}", kind, e);
        PolicyError::decode(kind, e)
    })
}
