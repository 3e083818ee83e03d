//! Logging utilities
//!
//! Subscriber initialisation for the binary and security event logging for
//! authorization decisions.

pub mod logging;

pub use logging::{SecurityLogger, init_logging};
