//! RBAC type definitions

use crate::utils::error::NocError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Set of roles allowed to perform one action
pub type RoleSet = BTreeSet<Role>;

/// Personnel role. A user holds exactly one role at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Developer account; passes every check
    SuperDev,
    /// Network operations staff
    Noc,
    /// Field activation technician
    Aktivator,
    /// Office administrator
    Admin,
    /// Customer service
    Cs,
}

impl Role {
    /// Every role, in catalog order
    pub const ALL: [Role; 5] = [
        Role::SuperDev,
        Role::Noc,
        Role::Aktivator,
        Role::Admin,
        Role::Cs,
    ];

    /// Wire name as stored in user profiles
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperDev => "SUPER_DEV",
            Role::Noc => "NOC",
            Role::Aktivator => "AKTIVATOR",
            Role::Admin => "ADMIN",
            Role::Cs => "CS",
        }
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            Role::SuperDev => "Developer with unrestricted access",
            Role::Noc => "Network operations center engineer",
            Role::Aktivator => "Field activation technician",
            Role::Admin => "Office administrator",
            Role::Cs => "Customer service agent",
        }
    }

    /// Whether this role bypasses the permission catalog entirely
    pub fn is_universal(self) -> bool {
        self == Role::SuperDev
    }

    /// Resolve a possibly missing role string, mapping anything unknown to `None`.
    ///
    /// Profiles that have not loaded yet and garbage values both end up as
    /// "no role", which every check denies.
    pub fn resolve(raw: Option<&str>) -> Option<Role> {
        raw.and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = NocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| NocError::parsing(format!("Unknown role: {}", s)))
    }
}

/// Guarded capability in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Register a new client
    ClientAdd,
    /// Edit or delete a client record
    ClientEditDelete,
    /// Add a VLAN to the inventory
    VlanAdd,
    /// Edit or delete a VLAN record
    VlanEditDelete,
    /// Open a work order
    WorkOrderCreate,
    /// Update work order progress and status
    WorkOrderUpdate,
    /// Delete a work order
    WorkOrderDelete,
    /// Use the broadcast composer
    BroadcastAccess,
    /// Read the audit log
    AuditLogView,
    /// Export tables to files
    DataExport,
    /// Manage team membership
    ManageTeam,
    /// Create accounts and change user roles
    ManageUsers,
}

impl Action {
    /// Every action known to the dashboard
    pub const ALL: [Action; 12] = [
        Action::ClientAdd,
        Action::ClientEditDelete,
        Action::VlanAdd,
        Action::VlanEditDelete,
        Action::WorkOrderCreate,
        Action::WorkOrderUpdate,
        Action::WorkOrderDelete,
        Action::BroadcastAccess,
        Action::AuditLogView,
        Action::DataExport,
        Action::ManageTeam,
        Action::ManageUsers,
    ];

    /// Catalog key
    pub fn as_str(self) -> &'static str {
        match self {
            Action::ClientAdd => "CLIENT_ADD",
            Action::ClientEditDelete => "CLIENT_EDIT_DELETE",
            Action::VlanAdd => "VLAN_ADD",
            Action::VlanEditDelete => "VLAN_EDIT_DELETE",
            Action::WorkOrderCreate => "WORK_ORDER_CREATE",
            Action::WorkOrderUpdate => "WORK_ORDER_UPDATE",
            Action::WorkOrderDelete => "WORK_ORDER_DELETE",
            Action::BroadcastAccess => "BROADCAST_ACCESS",
            Action::AuditLogView => "AUDIT_LOG_VIEW",
            Action::DataExport => "DATA_EXPORT",
            Action::ManageTeam => "MANAGE_TEAM",
            Action::ManageUsers => "MANAGE_USERS",
        }
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            Action::ClientAdd => "Register new clients",
            Action::ClientEditDelete => "Edit and delete client records",
            Action::VlanAdd => "Add VLANs to the inventory",
            Action::VlanEditDelete => "Edit and delete VLAN records",
            Action::WorkOrderCreate => "Open work orders",
            Action::WorkOrderUpdate => "Update work order status",
            Action::WorkOrderDelete => "Delete work orders",
            Action::BroadcastAccess => "Compose and send broadcasts",
            Action::AuditLogView => "Read the audit log",
            Action::DataExport => "Export data to CSV, Excel or PDF",
            Action::ManageTeam => "Manage team membership",
            Action::ManageUsers => "Manage user accounts and roles",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = NocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| NocError::parsing(format!("Unknown action: {}", s)))
    }
}

/// Why an access check was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No role: not signed in, profile still loading, or an unknown role value
    Unauthenticated,
    /// The catalog has no entry for the action
    NoCatalogEntry,
    /// The role is not in the action's allowed set
    RoleNotAllowed,
}

impl DenialReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialReason::Unauthenticated => "unauthenticated",
            DenialReason::NoCatalogEntry => "no_catalog_entry",
            DenialReason::RoleNotAllowed => "role_not_allowed",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Action that was checked
    pub action: Action,
    /// Whether permission is granted
    pub granted: bool,
    /// Role that was granted access
    pub granted_by: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<DenialReason>,
}

impl PermissionCheck {
    pub(super) fn granted(role: Role, action: Action) -> Self {
        Self {
            action,
            granted: true,
            granted_by: Some(role),
            denial_reason: None,
        }
    }

    pub(super) fn denied(action: Action, reason: DenialReason) -> Self {
        Self {
            action,
            granted: false,
            granted_by: None,
            denial_reason: Some(reason),
        }
    }
}
