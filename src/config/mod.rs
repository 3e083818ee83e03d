//! Configuration management
//!
//! Loads the permission catalog overrides and logging settings from YAML
//! and environment variables. Configuration is read once at startup.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{NocError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the config file used by the binary
pub const CONFIG_PATH_ENV: &str = "NOC_RBAC_CONFIG";

/// Top level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Permission catalog settings
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| NocError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| NocError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_lookup(lookup)
    }

    /// Apply environment variables on top of this configuration
    pub fn with_env(self) -> Result<Self> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply every variable the lookup defines on top of this configuration.
    ///
    /// Only variables that are set are applied, so a set variable wins even
    /// when its value equals the default.
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("NOC_RBAC_USE_BUILTIN") {
            self.rbac.use_builtin = parse_bool("NOC_RBAC_USE_BUILTIN", &value)?;
        }
        if let Some(value) = lookup("NOC_RBAC_LOG_DECISIONS") {
            self.rbac.log_decisions = parse_bool("NOC_RBAC_LOG_DECISIONS", &value)?;
        }
        if let Some(level) = lookup("NOC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(value) = lookup("NOC_LOG_JSON") {
            self.logging.json = parse_bool("NOC_LOG_JSON", &value)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .validate()
            .map_err(|e| NocError::config(format!("RBAC config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| NocError::config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(NocError::config(format!(
            "Invalid boolean for {}: {}",
            key, other
        ))),
    }
}
