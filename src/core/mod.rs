//! Core functionality
//!
//! Policy documents and the RAM integration built on them.

pub mod policy;
pub mod ram;
