//! Role-Based Access Control (RBAC) system
//!
//! A fixed catalog of roles, an immutable table from guarded action to the
//! roles allowed to perform it, and a total decision function. `SUPER_DEV`
//! passes every check; a missing role or a missing catalog entry is denied.

mod catalog;
mod navigation;
mod permissions;
mod system;
mod types;

// Re-export public types and structs
pub use catalog::PermissionCatalog;
pub use navigation::{Guarded, NavEntry};
pub use permissions::AccessMatrix;
pub use system::{RbacSystem, decide};
pub use types::{Action, DenialReason, PermissionCheck, Role, RoleSet};
