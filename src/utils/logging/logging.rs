//! Tracing subscriber setup and security event logging

use crate::auth::rbac::{Action, DenialReason, Role};
use crate::config::LoggingConfig;
use crate::utils::error::{NocError, Result};
use tracing::{debug, trace, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// returns an error instead of panicking.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| NocError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| NocError::config(format!("Failed to install logger: {}", e)))
}

/// Security-aware logging for access decisions
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log an authorization decision made on a guarded path
    pub fn log_authz_event(
        role: Option<Role>,
        action: Action,
        granted: bool,
        reason: Option<DenialReason>,
    ) {
        let role = role.map(Role::as_str).unwrap_or("<none>");

        if granted {
            debug!(
                target: "security",
                role,
                action = action.as_str(),
                granted,
                "Authorization granted: {} for {}",
                action,
                role
            );
        } else {
            warn!(
                target: "security",
                role,
                action = action.as_str(),
                granted,
                reason = reason.map(DenialReason::as_str),
                "Authorization denied: {} for {}",
                action,
                role
            );
        }
    }

    /// Log a decision on a hot path (render loops, menu filtering)
    pub fn log_decision(role: Option<Role>, action: Action, granted: bool) {
        trace!(
            target: "security",
            role = role.map(Role::as_str).unwrap_or("<none>"),
            action = action.as_str(),
            granted,
            "access decision"
        );
    }

    /// Log a decision for an action key outside the catalog
    pub fn log_unknown_action_decision(role: Option<Role>, raw_action: &str, granted: bool) {
        let safe = raw_action.chars().take(64).collect::<String>();
        trace!(
            target: "security",
            role = role.map(Role::as_str).unwrap_or("<none>"),
            raw_action = %safe,
            granted,
            "access decision for unknown action"
        );
    }

    /// Log a role name that could not be parsed
    pub fn log_unknown_role(raw: &str) {
        // Truncate to keep arbitrary client input out of the logs
        let safe = raw.chars().take(64).collect::<String>();
        debug!(target: "security", raw_role = %safe, "Unknown role treated as unauthenticated");
    }
}
