//! Integration tests for noc-rbac
//!
//! These tests use the public API the dashboard uses.

pub mod access_tests;
pub mod config_tests;
pub mod navigation_tests;
