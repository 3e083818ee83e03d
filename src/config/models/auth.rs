//! Authorization configuration

use super::default_true;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Start from the builtin permission table
    #[serde(default = "default_true")]
    pub use_builtin: bool,
    /// Catalog entries by action name, each replacing the builtin entry
    #[serde(default)]
    pub permissions: BTreeMap<String, Vec<String>>,
    /// Trace every access decision
    #[serde(default)]
    pub log_decisions: bool,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            permissions: BTreeMap::new(),
            log_decisions: false,
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.use_builtin {
            self.use_builtin = other.use_builtin;
        }
        self.permissions.extend(other.permissions);
        if other.log_decisions {
            self.log_decisions = other.log_decisions;
        }
        self
    }
}
