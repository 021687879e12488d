//! Integration tests for alicloud-ram

pub mod policy_document_tests;
pub mod ram_client_tests;
