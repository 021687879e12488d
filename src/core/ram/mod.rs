//! Alibaba Cloud RAM integration
//!
//! RPC-style API client used to fetch roles, and the trust validator that
//! checks a role can be assumed by a given cloud service.

pub mod client;
pub mod config;
pub mod error;
pub mod signer;
pub mod types;
pub mod validator;

pub use client::{RamApi, RamClient};
pub use config::RamConfig;
pub use error::{RamApiError, RamErrorMapper};
pub use types::Role;
pub use validator::{ECS_SERVICE_PRINCIPAL, TrustValidator};
