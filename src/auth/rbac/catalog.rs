//! Permission catalog: the immutable action -> roles table

use crate::config::RbacConfig;
use crate::utils::error::{NocError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::types::{Action, Role, RoleSet};

use super::types::Role::{Admin, Aktivator, Cs, Noc, SuperDev};

/// Dashboard permission table.
///
/// `SUPER_DEV` is listed where the dashboard always listed it; its access
/// comes from the universal override, not from membership here.
const BUILTIN: &[(Action, &[Role])] = &[
    // Clients
    (Action::ClientAdd, &[SuperDev, Noc, Aktivator, Admin]),
    (Action::ClientEditDelete, &[SuperDev, Admin]),
    // VLAN inventory
    (Action::VlanAdd, &[SuperDev, Noc, Admin]),
    (Action::VlanEditDelete, &[SuperDev, Noc, Admin]),
    // Work orders
    (Action::WorkOrderCreate, &[SuperDev, Noc, Admin, Cs]),
    (Action::WorkOrderUpdate, &[SuperDev, Noc, Aktivator, Admin]),
    (Action::WorkOrderDelete, &[SuperDev, Admin]),
    // Broadcast, audit and export
    (Action::BroadcastAccess, &[SuperDev, Noc, Admin]),
    (Action::AuditLogView, &[SuperDev, Admin]),
    (Action::DataExport, &[SuperDev, Noc, Admin]),
    // Administration
    (Action::ManageTeam, &[SuperDev, Admin]),
    (Action::ManageUsers, &[SuperDev]),
];

/// Immutable mapping from action to the set of roles allowed to perform it.
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate a catalog after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionCatalog {
    entries: BTreeMap<Action, RoleSet>,
}

impl PermissionCatalog {
    /// The dashboard's builtin table
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|(action, roles)| (*action, roles.iter().copied().collect())),
        )
    }

    /// A catalog with no entries; only `SUPER_DEV` passes any check
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from explicit entries. A later entry for the same action replaces
    /// the earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Action, RoleSet)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Build from configuration: the builtin table (unless disabled) with the
    /// configured entries replacing it action by action.
    ///
    /// Unknown action or role names are configuration errors.
    pub fn from_config(config: &RbacConfig) -> Result<Self> {
        let mut entries = if config.use_builtin {
            Self::builtin().entries
        } else {
            BTreeMap::new()
        };

        for (raw_action, raw_roles) in &config.permissions {
            let action: Action = raw_action.parse().map_err(|_| {
                NocError::config(format!("Unknown action '{}' in rbac.permissions", raw_action))
            })?;

            let roles = raw_roles
                .iter()
                .map(|raw_role| {
                    raw_role.parse::<Role>().map_err(|_| {
                        NocError::config(format!(
                            "Unknown role '{}' for action {} in rbac.permissions",
                            raw_role, action
                        ))
                    })
                })
                .collect::<Result<RoleSet>>()?;

            debug!("Catalog entry for {} set from configuration", action);
            entries.insert(action, roles);
        }

        debug!("Permission catalog built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Roles listed for an action, `None` when the action has no entry
    pub fn entry(&self, action: Action) -> Option<&RoleSet> {
        self.entries.get(&action)
    }

    pub fn contains(&self, action: Action) -> bool {
        self.entries.contains_key(&action)
    }

    /// Read-only view over all entries in action order
    pub fn iter(&self) -> impl Iterator<Item = (Action, &RoleSet)> {
        self.entries.iter().map(|(action, roles)| (*action, roles))
    }

    /// Actions that have an entry
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Referenced actions that have no entry, sorted and deduplicated.
    ///
    /// Callers pass every action their menus, routes and buttons use; a
    /// non-empty result means some affordance is silently always denied.
    pub fn missing_entries<I>(&self, referenced: I) -> Vec<Action>
    where
        I: IntoIterator<Item = Action>,
    {
        let mut missing: Vec<Action> = referenced
            .into_iter()
            .filter(|action| !self.contains(*action))
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }

    /// Whether every known action has an entry
    pub fn is_complete(&self) -> bool {
        self.missing_entries(Action::ALL).is_empty()
    }
}
