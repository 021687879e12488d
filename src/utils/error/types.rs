//! Error type definitions

use crate::core::ram::RamApiError;
use std::fmt;
use thiserror::Error;

/// Result type alias for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Which policy document an encode/decode error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Role trust policy
    RolePolicy,
    /// Resource access policy
    Policy,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RolePolicy => f.write_str("role policy"),
            Self::Policy => f.write_str("policy"),
        }
    }
}

/// Main error type for policy operations
#[derive(Error, Debug)]
pub enum PolicyError {
    /// JSON text does not match the expected document shape
    #[error("Failed to decode {kind} document: {source}")]
    Decode {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    /// The model could not be encoded to JSON
    #[error("Failed to encode {kind} document: {source}")]
    Encode {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    /// A loosely-typed input did not hold the expected type
    #[error("Type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Trust document is well-formed but lacks the required service principal
    #[error("Role policy services must contain '{service}', now is \n{document}.")]
    Validation { service: String, document: String },

    /// The RAM API call failed
    #[error("GetRole {role_name} got an error: {source}")]
    Upstream {
        role_name: String,
        #[source]
        source: RamApiError,
    },

    /// A caller broke a documented precondition
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
