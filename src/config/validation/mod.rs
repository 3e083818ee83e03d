//! Configuration validation
//!
//! Catalog integrity is checked here, at load time, so the decision path
//! never has to.

mod auth_validators;
mod logging_validators;
mod trait_def;

pub use trait_def::Validate;
