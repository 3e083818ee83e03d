//! Permission checking methods

use crate::utils::error::{NocError, Result};
use crate::utils::logging::SecurityLogger;
use serde::Serialize;
use std::collections::BTreeMap;

use super::system::{RbacSystem, decide};
use super::types::{Action, DenialReason, PermissionCheck, Role};

/// Role by action table of effective decisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessMatrix {
    pub roles: Vec<Role>,
    pub rows: BTreeMap<Action, Vec<bool>>,
}

impl AccessMatrix {
    /// Decision for one cell
    pub fn get(&self, role: Role, action: Action) -> Option<bool> {
        let column = self.roles.iter().position(|r| *r == role)?;
        self.rows.get(&action).and_then(|row| row.get(column).copied())
    }
}

impl RbacSystem {
    /// Detailed permission check
    pub fn check_permission_detailed(&self, role: Option<Role>, action: Action) -> PermissionCheck {
        let entry = self.catalog.entry(action);

        match (role, decide(role, entry)) {
            (Some(role), true) => PermissionCheck::granted(role, action),
            (None, _) => PermissionCheck::denied(action, DenialReason::Unauthenticated),
            (Some(_), false) if entry.is_none() => {
                PermissionCheck::denied(action, DenialReason::NoCatalogEntry)
            }
            (Some(_), false) => PermissionCheck::denied(action, DenialReason::RoleNotAllowed),
        }
    }

    /// Guard for route handlers that prefer `?` over a boolean.
    ///
    /// Denials are logged as security events.
    pub fn require(&self, role: Option<Role>, action: Action) -> Result<()> {
        let check = self.check_permission_detailed(role, action);
        SecurityLogger::log_authz_event(role, action, check.granted, check.denial_reason);

        match (check.granted, role) {
            (true, _) => Ok(()),
            (false, None) => Err(NocError::unauthorized(format!(
                "Sign in required for {}",
                action
            ))),
            (false, Some(role)) => Err(NocError::forbidden(format!(
                "Role {} may not perform {}",
                role, action
            ))),
        }
    }

    /// Actions a role may perform, in catalog order
    pub fn allowed_actions(&self, role: Option<Role>) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.has_access(role, *action))
            .collect()
    }

    /// Roles that pass the check for an action, the override included
    pub fn allowed_roles(&self, action: Action) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.has_access(Some(*role), action))
            .collect()
    }

    /// Full table of decisions for every role and action
    pub fn access_matrix(&self) -> AccessMatrix {
        let roles = Role::ALL.to_vec();
        let rows = Action::ALL
            .into_iter()
            .map(|action| {
                let row = roles
                    .iter()
                    .map(|role| self.has_access(Some(*role), action))
                    .collect();
                (action, row)
            })
            .collect();

        AccessMatrix { roles, rows }
    }
}
