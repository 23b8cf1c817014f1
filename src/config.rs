//! Configuration Management
//!
//! Handles persistent configuration storage for azrm: the subscription to
//! operate on, the default location threaded into region-scoped calls, and
//! an optional Resource Manager endpoint override.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment fallbacks consulted by the `effective_*` accessors.
pub const SUBSCRIPTION_ENV_VAR: &str = "AZURE_SUBSCRIPTION_ID";
pub const LOCATION_ENV_VAR: &str = "AZURE_DEFAULT_LOCATION";
pub const ENDPOINT_ENV_VAR: &str = "AZURE_RESOURCE_MANAGER_ENDPOINT";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Subscription to scope calls to
    #[serde(default)]
    pub subscription_id: Option<String>,
    /// Default location for region-scoped calls
    #[serde(default)]
    pub location: Option<String>,
    /// Resource Manager endpoint override
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("azrm").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective subscription (config > environment)
    pub fn effective_subscription(&self) -> Option<String> {
        self.subscription_id
            .clone()
            .or_else(|| std::env::var(SUBSCRIPTION_ENV_VAR).ok())
            .filter(|s| !s.is_empty())
    }

    /// Get effective location (config > environment)
    pub fn effective_location(&self) -> Option<String> {
        self.location
            .clone()
            .or_else(|| std::env::var(LOCATION_ENV_VAR).ok())
            .filter(|s| !s.is_empty())
    }

    /// Get effective endpoint override (config > environment)
    pub fn effective_endpoint(&self) -> Option<String> {
        self.endpoint
            .clone()
            .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
            .filter(|s| !s.is_empty())
    }

    /// Set subscription and save
    pub fn set_subscription(&mut self, subscription_id: &str) -> Result<()> {
        self.subscription_id = Some(subscription_id.to_string());
        self.save()
    }

    /// Set location and save
    pub fn set_location(&mut self, location: &str) -> Result<()> {
        self.location = Some(location.to_string());
        self.save()
    }
}
