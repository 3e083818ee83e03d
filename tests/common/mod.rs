//! Common test utilities for noc-rbac

pub mod fixtures;

pub use fixtures::{DashboardFixture, ProfileFactory, write_config};
