//! Helper functions for creating specific error types

use super::types::{DocumentKind, PolicyError};
use crate::core::ram::RamApiError;

impl PolicyError {
    pub fn decode(kind: DocumentKind, source: serde_json::Error) -> Self {
        Self::Decode { kind, source }
    }

    pub fn encode(kind: DocumentKind, source: serde_json::Error) -> Self {
        Self::Encode { kind, source }
    }

    pub fn type_mismatch<S: Into<String>>(
        field: S,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    pub fn validation<S: Into<String>, D: Into<String>>(service: S, document: D) -> Self {
        Self::Validation {
            service: service.into(),
            document: document.into(),
        }
    }

    pub fn upstream<S: Into<String>>(role_name: S, source: RamApiError) -> Self {
        Self::Upstream {
            role_name: role_name.into(),
            source,
        }
    }

    pub fn precondition<S: Into<String>>(message: S) -> Self {
        Self::Precondition(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// The offending document text, for errors that carry one
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::Validation { document, .. } => Some(document),
            _ => None,
        }
    }
}
