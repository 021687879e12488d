//! RAM policy documents
//!
//! Typed model of role trust policies and resource access policies, with
//! JSON parsing and assembly from caller-supplied collections.

mod assembler;
mod parser;
mod types;

pub use assembler::{
    ASSUME_ROLE_ACTION, DEFAULT_POLICY_VERSION, StatementSpec, assemble_policy_document,
    assemble_role_policy_document, principals_from_values, statements_from_values,
};
pub use parser::{parse_policy_document, parse_role_policy_document};
pub use types::{Effect, Policy, PolicyStatement, Principal, RolePolicy, RolePolicyStatement};
