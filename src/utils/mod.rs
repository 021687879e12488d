//! Utility modules
//!
//! Error types, logging setup and collection helpers.

pub mod collections;
pub mod error;
pub mod logging;

pub use collections::get_intersection;
