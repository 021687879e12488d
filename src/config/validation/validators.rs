//! Validators for configuration sections

use super::trait_def::Validate;
use crate::config::models::{LoggingConfig, TrustConfig};

impl Validate for TrustConfig {
    fn validate(&self) -> Result<(), String> {
        if self.required_service.is_empty() {
            return Err("Required service principal cannot be empty".to_string());
        }
        // Principal entries are compared after trimming, so padding here could never match
        if self.required_service.trim() != self.required_service {
            return Err(format!(
                "Required service principal '{}' has surrounding whitespace",
                self.required_service
            ));
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
