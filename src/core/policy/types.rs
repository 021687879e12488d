//! Policy document type definitions
//!
//! Field names on the wire are capitalised exactly as RAM expects them, and
//! fields serialize in declaration order.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a matching statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Allow" => Ok(Self::Allow),
            "Deny" => Ok(Self::Deny),
            other => Err(format!("unknown effect '{}'", other)),
        }
    }
}

/// Actors a trust statement applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Cloud service identifiers, e.g. `ecs.aliyuncs.com`
    #[serde(rename = "Service", default, deserialize_with = "nullable_vec")]
    pub service: Vec<String>,
    /// Account or role identifiers
    #[serde(rename = "RAM", default, deserialize_with = "nullable_vec")]
    pub ram: Vec<String>,
}

impl Principal {
    pub fn new(service: Vec<String>, ram: Vec<String>) -> Self {
        Self { service, ram }
    }

    pub fn is_empty(&self) -> bool {
        self.service.is_empty() && self.ram.is_empty()
    }
}

/// One trust rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action", default)]
    pub action: String,
    #[serde(rename = "Principal", default)]
    pub principal: Principal,
}

/// Role trust policy: which identities may assume a role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicy {
    #[serde(rename = "Statement", default, deserialize_with = "nullable_vec")]
    pub statement: Vec<RolePolicyStatement>,
    #[serde(rename = "Version", default)]
    pub version: String,
}

impl RolePolicy {
    pub fn new<S: Into<String>>(version: S, statement: Vec<RolePolicyStatement>) -> Self {
        Self {
            statement,
            version: version.into(),
        }
    }

    /// Whether any statement names `service` as a principal.
    ///
    /// Entries are compared after trimming surrounding space characters.
    pub fn trusts_service(&self, service: &str) -> bool {
        self.statement
            .iter()
            .flat_map(|statement| statement.principal.service.iter())
            .any(|entry| entry.trim_matches(' ') == service)
    }
}

/// One resource access rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action", default, deserialize_with = "nullable_vec")]
    pub action: Vec<String>,
    #[serde(rename = "Resource", default, deserialize_with = "nullable_vec")]
    pub resource: Vec<String>,
}

/// Resource access policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(rename = "Statement", default, deserialize_with = "nullable_vec")]
    pub statement: Vec<PolicyStatement>,
    #[serde(rename = "Version", default)]
    pub version: String,
}

impl Policy {
    pub fn new<S: Into<String>>(version: S, statement: Vec<PolicyStatement>) -> Self {
        Self {
            statement,
            version: version.into(),
        }
    }
}

// JSON `null` decodes to an empty list, same as an absent field.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
