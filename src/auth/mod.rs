//! Authorization for the NOC dashboard
//!
//! Session checks happen before a request reaches the application; this
//! module only answers feature-level questions once a session exists.

pub mod rbac;

pub use rbac::{Action, PermissionCatalog, RbacSystem, Role};
