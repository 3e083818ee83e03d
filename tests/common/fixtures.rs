//! Test fixtures and data factories
//!
//! Profiles carry the role as the raw string the backend stores, the way the
//! dashboard receives it.

use noc_rbac::{Action, NavEntry};
use std::io::Write;
use tempfile::NamedTempFile;

/// User profile as fetched from the backend
#[derive(Debug, Clone)]
pub struct TestProfile {
    pub email: String,
    pub role: Option<String>,
}

/// Factory for creating test profiles
pub struct ProfileFactory;

impl ProfileFactory {
    /// Profile with the given role name
    pub fn with_role(role: &str) -> TestProfile {
        TestProfile {
            email: format!("{}@noc.example.net", role.to_ascii_lowercase()),
            role: Some(role.to_string()),
        }
    }

    /// Signed in, profile row not loaded yet
    pub fn loading() -> TestProfile {
        TestProfile {
            email: "pending@noc.example.net".to_string(),
            role: None,
        }
    }

    /// One profile per known role
    pub fn all_roles() -> Vec<TestProfile> {
        ["SUPER_DEV", "NOC", "AKTIVATOR", "ADMIN", "CS"]
            .into_iter()
            .map(Self::with_role)
            .collect()
    }
}

/// Every gated affordance of the dashboard
pub struct DashboardFixture;

impl DashboardFixture {
    pub fn sidebar() -> Vec<NavEntry> {
        vec![
            NavEntry::new(Action::ClientAdd, "/clients"),
            NavEntry::new(Action::VlanAdd, "/vlans"),
            NavEntry::new(Action::WorkOrderCreate, "/work-orders"),
            NavEntry::new(Action::BroadcastAccess, "/broadcast"),
            NavEntry::new(Action::AuditLogView, "/audit-log"),
            NavEntry::new(Action::ManageTeam, "/team"),
            NavEntry::new(Action::ManageUsers, "/users"),
        ]
    }

    pub fn client_row_buttons() -> Vec<Action> {
        vec![Action::ClientEditDelete, Action::DataExport]
    }

    pub fn work_order_row_buttons() -> Vec<Action> {
        vec![Action::WorkOrderUpdate, Action::WorkOrderDelete]
    }

    pub fn vlan_row_buttons() -> Vec<Action> {
        vec![Action::VlanEditDelete]
    }

    /// Every action referenced anywhere above
    pub fn referenced_actions() -> Vec<Action> {
        Self::sidebar()
            .into_iter()
            .map(|entry| entry.action)
            .chain(Self::client_row_buttons())
            .chain(Self::work_order_row_buttons())
            .chain(Self::vlan_row_buttons())
            .collect()
    }
}

/// Write a YAML config to a temporary file kept alive by the returned handle
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}
