//! Configuration data models

pub mod logging;
pub mod trust;

pub use crate::core::ram::RamConfig;
pub use logging::*;
pub use trust::*;

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
