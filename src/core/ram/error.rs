//! RAM API error handling
//!
//! Error types and mapping for the RAM API client

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while talking to the RAM API
#[derive(Error, Debug)]
pub enum RamApiError {
    #[error("Network error for ram: {message}")]
    Network { message: String },

    #[error("RAM API error (HTTP {status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Failed to parse ram response: {message}")]
    ResponseParsing { message: String },

    #[error("Configuration error for ram: {message}")]
    Configuration { message: String },

    #[error("Request signing failed: {message}")]
    Signing { message: String },
}

impl RamApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    pub fn response_parsing(message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    /// Service error code, e.g. `EntityNotExist.Role`
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Request id reported by the service, useful when filing tickets
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    request_id: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

/// Error mapper for RAM responses
#[derive(Debug, Clone, Default)]
pub struct RamErrorMapper;

impl RamErrorMapper {
    /// Map a non-success HTTP response to an API error
    pub fn map_http_error(&self, status_code: u16, response_body: &str) -> RamApiError {
        match serde_json::from_str::<ErrorBody>(response_body) {
            Ok(body) if body.code.is_some() => RamApiError::Api {
                status: status_code,
                code: body.code.unwrap_or_default(),
                message: body.message.unwrap_or_default(),
                request_id: body.request_id,
            },
            _ => {
                let code = match status_code {
                    400 => "BadRequest",
                    401 | 403 => "Forbidden",
                    404 => "NotFound",
                    429 => "Throttling",
                    500..=599 => "ServiceUnavailable",
                    _ => "Unknown",
                };
                RamApiError::api(status_code, code, response_body)
            }
        }
    }

    pub fn map_network_error(&self, error: &dyn std::error::Error) -> RamApiError {
        RamApiError::network(format!("Network error: {}", error))
    }

    pub fn map_parsing_error(&self, error: &dyn std::error::Error) -> RamApiError {
        RamApiError::response_parsing(format!("Parsing error: {}", error))
    }
}
