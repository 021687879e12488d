//! # alicloud-ram
//!
//! RAM (Resource Access Management) policy support for Alibaba Cloud
//! providers: a typed model of trust and access policy documents, JSON
//! parsing and assembly, and validation that a role can be assumed by a
//! cloud service.
//!
//! ## Assembling documents
//!
//! ```rust
//! use alicloud_ram::{Effect, StatementSpec, assemble_policy_document, assemble_role_policy_document};
//!
//! let trust = assemble_role_policy_document(["acs:ram::123456:root"], ["ecs.aliyuncs.com"], "1")?;
//! assert!(trust.contains("sts:AssumeRole"));
//!
//! let policy = assemble_policy_document(
//!     &[StatementSpec::new(Effect::Allow, ["oss:GetObject"], ["acs:oss:*:*:bucket/*"])],
//!     "1",
//! )?;
//! assert!(policy.starts_with(r#"{"Statement":[{"Effect":"Allow""#));
//! # Ok::<(), alicloud_ram::PolicyError>(())
//! ```
//!
//! ## Validating a role
//!
//! ```rust,no_run
//! use alicloud_ram::{RamClient, RamConfig, TrustValidator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RamClient::new(&RamConfig::from_env()?)?;
//!     TrustValidator::new(client)
//!         .judge_role_policy_principal("EcsInstanceRole")
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{DocumentKind, PolicyError, Result};

pub use core::policy::{
    ASSUME_ROLE_ACTION, DEFAULT_POLICY_VERSION, Effect, Policy, PolicyStatement, Principal,
    RolePolicy, RolePolicyStatement, StatementSpec, assemble_policy_document,
    assemble_role_policy_document, parse_policy_document, parse_role_policy_document,
    principals_from_values, statements_from_values,
};
pub use core::ram::{
    ECS_SERVICE_PRINCIPAL, RamApi, RamApiError, RamClient, RamConfig, Role, TrustValidator,
};
pub use utils::collections::get_intersection;
