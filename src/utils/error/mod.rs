//! Error handling for policy assembly, parsing and trust validation
//!
//! This module defines the error type shared by every operation in the crate.

mod helpers;
mod types;

pub use types::{DocumentKind, PolicyError, Result};
