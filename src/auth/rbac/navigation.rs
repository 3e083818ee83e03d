//! Filtering of menus, tabs and row buttons by role

use serde::{Deserialize, Serialize};

use super::system::RbacSystem;
use super::types::{Action, Role};

/// Anything shown only to roles allowed to perform an action
pub trait Guarded {
    fn required_action(&self) -> Action;
}

/// Sidebar or tab entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub action: Action,
    pub view: String,
}

impl NavEntry {
    pub fn new(action: Action, view: impl Into<String>) -> Self {
        Self {
            action,
            view: view.into(),
        }
    }
}

impl Guarded for NavEntry {
    fn required_action(&self) -> Action {
        self.action
    }
}

impl Guarded for Action {
    fn required_action(&self) -> Action {
        *self
    }
}

impl RbacSystem {
    /// Entries the role may see, in their original order. Denied entries are
    /// omitted, not disabled.
    pub fn visible_items<'a, T: Guarded>(&self, role: Option<Role>, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.has_access(role, item.required_action()))
            .collect()
    }

    /// Actions referenced by `items` that have no catalog entry
    pub fn unguarded_references<T: Guarded>(&self, items: &[T]) -> Vec<Action> {
        self.catalog
            .missing_entries(items.iter().map(Guarded::required_action))
    }
}
