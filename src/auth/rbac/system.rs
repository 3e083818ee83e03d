//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::utils::error::Result;
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tracing::info;

use super::catalog::PermissionCatalog;
use super::types::{Action, Role, RoleSet};

/// Decide access from a role and an already resolved catalog entry.
///
/// Order matters: an absent role is denied before the `SUPER_DEV` override is
/// considered, and the override applies even when the entry is missing.
pub fn decide(role: Option<Role>, entry: Option<&RoleSet>) -> bool {
    let Some(role) = role else {
        return false;
    };

    if role.is_universal() {
        return true;
    }

    match entry {
        Some(allowed) => allowed.contains(&role),
        None => false,
    }
}

/// Authorizer handed to every route guard, menu and button that needs a
/// decision. Cloning shares the same catalog.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Permission catalog, immutable for the process lifetime
    pub(super) catalog: Arc<PermissionCatalog>,
    /// Emit a trace event for every decision
    pub(super) log_decisions: bool,
}

impl RbacSystem {
    /// Create an authorizer over an existing catalog
    pub fn new(catalog: Arc<PermissionCatalog>) -> Self {
        info!(
            "Initializing RBAC system with {} catalog entries",
            catalog.len()
        );

        Self {
            catalog,
            log_decisions: false,
        }
    }

    /// Create an authorizer over the builtin dashboard catalog
    pub fn builtin() -> Self {
        Self::new(Arc::new(PermissionCatalog::builtin()))
    }

    /// Create an authorizer from configuration
    pub fn from_config(config: &RbacConfig) -> Result<Self> {
        let catalog = PermissionCatalog::from_config(config)?;

        if !catalog.is_complete() {
            let missing = catalog.missing_entries(Action::ALL);
            info!(
                "Permission catalog has no entry for {} action(s); they are denied to every role but SUPER_DEV",
                missing.len()
            );
        }

        let mut rbac = Self::new(Arc::new(catalog));
        rbac.log_decisions = config.log_decisions;
        Ok(rbac)
    }

    /// Whether `role` may perform `action`.
    ///
    /// `None` stands for a caller that is not signed in or whose profile has
    /// not loaded. Total: never panics and never errors.
    pub fn has_access(&self, role: Option<Role>, action: Action) -> bool {
        let granted = decide(role, self.catalog.entry(action));

        if self.log_decisions {
            SecurityLogger::log_decision(role, action, granted);
        }

        granted
    }

    /// String form of [`RbacSystem::has_access`] for values straight from a
    /// user profile or request. Unknown roles and unknown actions are denied.
    pub fn has_access_str(&self, role: Option<&str>, action: &str) -> bool {
        let resolved = Role::resolve(role);
        if let (None, Some(raw)) = (resolved, role) {
            SecurityLogger::log_unknown_role(raw);
        }

        match action.parse::<Action>() {
            Ok(action) => self.has_access(resolved, action),
            Err(_) => {
                // An unknown key has no catalog entry, which only the override passes
                let granted = decide(resolved, None);
                if self.log_decisions {
                    SecurityLogger::log_unknown_action_decision(resolved, action, granted);
                }
                granted
            }
        }
    }

    /// Read-only view of the catalog, for callers that render lists
    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    pub fn catalog_handle(&self) -> Arc<PermissionCatalog> {
        Arc::clone(&self.catalog)
    }
}
