//! RPC-style request signing for Alibaba Cloud APIs
//!
//! Implements signature version 1.0: HMAC-SHA1 over the canonicalized query
//! string, keyed with the access key secret followed by `&`.

use super::error::RamApiError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

/// Signer for RPC-style requests
#[derive(Clone)]
pub struct RpcSigner {
    access_key_id: String,
    access_key_secret: String,
    security_token: Option<String>,
}

impl std::fmt::Debug for RpcSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcSigner")
            .field("access_key_id", &self.access_key_id)
            .finish_non_exhaustive()
    }
}

impl RpcSigner {
    pub fn new(
        access_key_id: String,
        access_key_secret: String,
        security_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id,
            access_key_secret,
            security_token,
        }
    }

    /// Add the common authentication parameters and the `Signature` to `params`
    pub fn sign(
        &self,
        method: &str,
        params: &mut BTreeMap<String, String>,
        timestamp: DateTime<Utc>,
        nonce: &str,
    ) -> Result<(), RamApiError> {
        params.insert("AccessKeyId".to_string(), self.access_key_id.clone());
        params.insert("SignatureMethod".to_string(), "HMAC-SHA1".to_string());
        params.insert("SignatureVersion".to_string(), "1.0".to_string());
        params.insert("SignatureNonce".to_string(), nonce.to_string());
        params.insert(
            "Timestamp".to_string(),
            timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        );
        if let Some(ref token) = self.security_token {
            params.insert("SecurityToken".to_string(), token.clone());
        }
        params.remove("Signature");

        let signature = self.signature(&string_to_sign(method, params))?;
        params.insert("Signature".to_string(), signature);
        Ok(())
    }

    fn signature(&self, string_to_sign: &str) -> Result<String, RamApiError> {
        let key = format!("{}&", self.access_key_secret);
        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| RamApiError::signing(e.to_string()))?;
        mac.update(string_to_sign.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// `METHOD&%2F&<encoded canonical query>`
pub fn string_to_sign(method: &str, params: &BTreeMap<String, String>) -> String {
    format!(
        "{}&{}&{}",
        method,
        percent_encode("/"),
        percent_encode(&canonical_query(params))
    )
}

/// Parameters sorted by key, percent-encoded and joined with `&`
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// RFC 3986 percent-encoding: only `A-Z a-z 0-9 - _ . ~` stay literal
pub fn percent_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
}
