//! Validation trait definition

/// Validation trait for configuration structures.
///
/// Errors are plain messages; callers wrap them with the section name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
