//! Configuration models

pub mod auth;
pub mod logging;

pub use auth::RbacConfig;
pub use logging::LoggingConfig;

fn default_true() -> bool {
    true
}
