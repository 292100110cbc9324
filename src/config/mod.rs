//! Configuration for the loading pipeline
//!
//! Handles loader configuration defaults and loading from TOML files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::LoaderError;

/// Loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Project root all resolution is relative to
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// File suffix appended to resolved class paths
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,

    /// Extra vendors registered at startup, on top of the built-ins
    #[serde(default)]
    pub vendors: HashMap<String, String>,
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_source_suffix() -> String {
    ".src".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            source_suffix: default_source_suffix(),
            vendors: HashMap::new(),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            LoaderError::InvalidConfig(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            LoaderError::InvalidConfig(format!("Failed to parse config TOML: {}", e))
        })
    }
}
