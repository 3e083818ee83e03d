//! Authorization configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::{Action, PermissionCatalog, Role};
use crate::config::models::RbacConfig;
use tracing::{debug, warn};

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating rbac configuration");

        for (action, roles) in &self.permissions {
            let action: Action = action.parse().map_err(|e| format!("{}", e))?;

            for role in roles {
                role.parse::<Role>()
                    .map_err(|e| format!("{} (in entry for {})", e, action))?;
            }

            if roles.is_empty() {
                warn!("Catalog entry for {} is empty; only SUPER_DEV will pass", action);
            }
        }

        if !self.use_builtin {
            let catalog = PermissionCatalog::from_config(self).map_err(|e| e.to_string())?;
            let missing = catalog.missing_entries(Action::ALL);
            if !missing.is_empty() {
                warn!(
                    "Builtin catalog disabled and {} action(s) have no entry",
                    missing.len()
                );
            }
        }

        Ok(())
    }
}
