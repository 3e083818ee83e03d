//! # noc-rbac
//!
//! Role-based access control for an ISP network operations dashboard.
//!
//! The dashboard delegates storage, auth sessions and realtime feeds to a
//! hosted backend. What remains in the application is the question "may this
//! role do this?", asked on every render, route transition and row button.
//! This crate answers it from a fixed permission catalog.
//!
//! ## Features
//!
//! - **Closed enums**: `Role` and `Action` are compile-time known
//! - **Universal override**: `SUPER_DEV` passes every check
//! - **Fail closed**: no role, unknown role or missing catalog entry means denied
//! - **Immutable catalog**: built once, shared behind an `Arc`, safe across threads
//! - **Configurable**: builtin table with per-action overrides from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use noc_rbac::{Action, RbacSystem, Role};
//!
//! let rbac = RbacSystem::builtin();
//!
//! assert!(rbac.has_access(Some(Role::Noc), Action::ClientAdd));
//! assert!(!rbac.has_access(Some(Role::Admin), Action::ManageUsers));
//! assert!(rbac.has_access(Some(Role::SuperDev), Action::ManageUsers));
//! assert!(!rbac.has_access(None, Action::VlanEditDelete));
//! ```
//!
//! ## Menus
//!
//! ```rust
//! use noc_rbac::{Action, NavEntry, RbacSystem, Role};
//!
//! let rbac = RbacSystem::builtin();
//! let sidebar = vec![
//!     NavEntry::new(Action::ClientAdd, "clients"),
//!     NavEntry::new(Action::AuditLogView, "audit-log"),
//! ];
//!
//! let visible = rbac.visible_items(Some(Role::Cs), &sidebar);
//! assert!(visible.is_empty());
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AccessMatrix, Action, DenialReason, Guarded, NavEntry, PermissionCatalog, PermissionCheck,
    RbacSystem, Role, RoleSet, decide,
};
pub use config::Config;
pub use utils::error::{NocError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information recorded by `build.rs`
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Seconds since the epoch at build time
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
