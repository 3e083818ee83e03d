//! Error handling for the authorization library
//!
//! Access decisions never produce errors; these types cover configuration
//! loading and the `Result`-returning guard helpers.

mod helpers;
mod types;

pub use types::{NocError, Result};
