//! Assembly of policy documents from caller-supplied collections
//!
//! The typed entry points take ordered collections and never fail on their
//! inputs. The `*_from_values` adapters sit at the boundary with schema
//! layers that hand over untyped JSON values, and report the first offending
//! field by its path.

use super::types::{Effect, Policy, PolicyStatement, Principal, RolePolicy, RolePolicyStatement};
use crate::utils::error::{DocumentKind, PolicyError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Action granted by every assembled trust statement
pub const ASSUME_ROLE_ACTION: &str = "sts:AssumeRole";

/// RAM policy language version
pub const DEFAULT_POLICY_VERSION: &str = "1";

/// Typed descriptor of one resource access statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSpec {
    pub effect: Effect,
    pub action: Vec<String>,
    pub resource: Vec<String>,
}

impl StatementSpec {
    pub fn new<A, R>(effect: Effect, action: A, resource: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            effect,
            action: action.into_iter().map(Into::into).collect(),
            resource: resource.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a descriptor from a mapping with `effect`, `action` and `resource` keys
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, "statement")
    }

    fn from_value_at(value: &Value, path: &str) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| PolicyError::type_mismatch(path, "object", value_kind(value)))?;

        let effect_path = format!("{}.effect", path);
        let effect = match required(map, "effect", &effect_path)? {
            Value::String(s) => s.parse::<Effect>().map_err(|_| {
                PolicyError::type_mismatch(&effect_path, "\"Allow\" or \"Deny\"", "string")
            })?,
            other => {
                return Err(PolicyError::type_mismatch(
                    effect_path,
                    "string",
                    value_kind(other),
                ));
            }
        };

        let action_path = format!("{}.action", path);
        let action = string_list(required(map, "action", &action_path)?, &action_path)?;

        let resource_path = format!("{}.resource", path);
        let resource = string_list(required(map, "resource", &resource_path)?, &resource_path)?;

        Ok(Self {
            effect,
            action,
            resource,
        })
    }
}

impl From<StatementSpec> for PolicyStatement {
    fn from(spec: StatementSpec) -> Self {
        Self {
            effect: spec.effect,
            action: spec.action,
            resource: spec.resource,
        }
    }
}

/// Build a trust policy allowing the given principals to assume a role.
///
/// Produces exactly one `Allow` statement for `sts:AssumeRole`; principal
/// order follows iteration order of the inputs.
pub fn assemble_role_policy_document<R, S>(
    ram_principals: R,
    service_principals: S,
    version: &str,
) -> Result<String>
where
    R: IntoIterator,
    R::Item: Into<String>,
    S: IntoIterator,
    S::Item: Into<String>,
{
    let principal = Principal::new(
        service_principals.into_iter().map(Into::into).collect(),
        ram_principals.into_iter().map(Into::into).collect(),
    );

    let statement = RolePolicyStatement {
        effect: Effect::Allow,
        action: ASSUME_ROLE_ACTION.to_string(),
        principal,
    };

    encode(
        DocumentKind::RolePolicy,
        &RolePolicy::new(version, vec![statement]),
    )
}

/// Build a resource access policy with one statement per descriptor, in order
pub fn assemble_policy_document(statements: &[StatementSpec], version: &str) -> Result<String> {
    let statement = statements
        .iter()
        .cloned()
        .map(PolicyStatement::from)
        .collect();

    encode(DocumentKind::Policy, &Policy::new(version, statement))
}

/// Convert untyped principal identifiers, failing on the first non-string element
pub fn principals_from_values(field: &str, values: &[Value]) -> Result<Vec<String>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(PolicyError::type_mismatch(
                format!("{}[{}]", field, i),
                "string",
                value_kind(other),
            )),
        })
        .collect()
}

/// Convert untyped statement descriptors. Any malformed descriptor fails the whole batch.
pub fn statements_from_values(values: &[Value]) -> Result<Vec<StatementSpec>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| StatementSpec::from_value_at(value, &format!("document[{}]", i)))
        .collect()
}

fn encode<T: Serialize>(kind: DocumentKind, document: &T) -> Result<String> {
    let json = serde_json::to_string(document).map_err(|e| PolicyError::encode(kind, e))?;
    debug!("Assembled {} document ({} bytes)", kind, json.len());
    Ok(json)
}

fn required<'a>(map: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Value> {
    map.get(key)
        .ok_or_else(|| PolicyError::type_mismatch(path, "a value", "missing key"))
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>> {
    match value {
        Value::Array(items) => principals_from_values(path, items),
        other => Err(PolicyError::type_mismatch(
            path,
            "array of strings",
            value_kind(other),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
